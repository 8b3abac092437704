pub(crate) mod input;

use graph_connector_types::graph_definition::GraphDefinition;
use serde_json::Value;

use crate::{auth::AuthPredicates, projection::ProjectionResolver, session::TranslationSession};

/// Everything one translation needs: the schema, the request arguments and
/// the host collaborators.
///
/// The context is cheap to build and lives for a single operation; the
/// [`TranslationSession`] behind it is the long-lived part.
pub struct TranslationContext<'a> {
    definition: &'a GraphDefinition,
    session: &'a TranslationSession,
    auth: &'a dyn AuthPredicates,
    projection: &'a dyn ProjectionResolver,
    args: &'a Value,
    roles: &'a [String],
}

impl<'a> TranslationContext<'a> {
    pub fn new(
        definition: &'a GraphDefinition,
        session: &'a TranslationSession,
        auth: &'a dyn AuthPredicates,
        projection: &'a dyn ProjectionResolver,
        args: &'a Value,
    ) -> Self {
        Self {
            definition,
            session,
            auth,
            projection,
            args,
            roles: &[],
        }
    }

    /// Attaches the roles carried by the request credentials.
    #[must_use]
    pub fn with_roles(mut self, roles: &'a [String]) -> Self {
        self.roles = roles;
        self
    }

    pub fn definition(&self) -> &'a GraphDefinition {
        self.definition
    }

    pub fn roles(&self) -> &'a [String] {
        self.roles
    }

    pub(crate) fn session(&self) -> &'a TranslationSession {
        self.session
    }

    pub(crate) fn auth(&self) -> &'a dyn AuthPredicates {
        self.auth
    }

    pub(crate) fn projection(&self) -> &'a dyn ProjectionResolver {
        self.projection
    }

    /// A raw operation argument by name.
    pub fn arg(&self, name: &str) -> Option<&'a Value> {
        self.args.get(name)
    }

    pub fn where_input(&self) -> Option<&'a Value> {
        self.arg("where")
    }

    /// The `input` argument of a create operation.
    pub fn create_input(&self) -> Option<&'a Value> {
        self.arg("input")
    }

    pub fn update_input(&self) -> Option<&'a Value> {
        self.arg("update")
    }

    pub fn connect_input(&self) -> Option<&'a Value> {
        self.arg("connect")
    }

    pub fn disconnect_input(&self) -> Option<&'a Value> {
        self.arg("disconnect")
    }

    pub fn delete_input(&self) -> Option<&'a Value> {
        self.arg("delete")
    }
}
