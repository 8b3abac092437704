use serde::{Deserialize, Serialize};

use super::NodeId;

/// The operation an authorization rule applies to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOperation {
    Create,
    Read,
    Update,
    Delete,
    Connect,
    Disconnect,
}

/// One authorization rule attached to a node. Rule *evaluation* beyond role
/// matching happens in the external auth collaborator; the model only
/// records which operations a rule covers and which roles it admits.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthRule {
    pub(super) node_id: NodeId,
    pub(super) operations: Vec<AuthOperation>,
    pub(super) roles: Vec<String>,
}

impl AuthRule {
    pub fn new(node_id: NodeId, operations: Vec<AuthOperation>, roles: Vec<String>) -> Self {
        Self {
            node_id,
            operations,
            roles,
        }
    }

    pub(crate) fn node_id(&self) -> NodeId {
        self.node_id
    }
}
