//! Route resolution: templates, the ordered route table, parameter
//! extraction, and the redirect-path builder.

pub mod context;
pub mod redirect;
pub mod table;
pub mod template;

pub use context::RouteContext;
pub use redirect::discussions_path;
pub use table::{page_param, resolve, PageKey, ResolvedRoute, RouteFamily, RouteKey, ALL_ROUTES};
pub use template::{Bindings, RouteTemplate};

use crate::model::identifiers::EmptyId;
use thiserror::Error;

/// Route resolution failures.
///
/// All three variants are defect-class: the route table is exhaustive for
/// the application's routing surface and every bound token is non-empty by
/// construction, so none of these should occur at runtime. They are typed
/// (not panics) so the shell fails loudly and testably.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// No table entry matched the path.
    #[error("No route template matches path '{path}'")]
    NoMatch {
        /// The path that missed the whole table.
        path: String,
    },

    /// A template placeholder had no value to bind or fill.
    #[error("Missing parameter ':{name}' for template '{template}'")]
    MissingParam {
        /// Placeholder name, without the `:`.
        name: &'static str,
        /// The template that required it.
        template: &'static str,
    },

    /// A bound token was rejected by its identifier type.
    #[error("Invalid parameter ':{name}': {source}")]
    InvalidParam {
        /// Placeholder name, without the `:`.
        name: &'static str,
        /// The identifier validation failure.
        #[source]
        source: EmptyId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_match_names_the_path() {
        let err = RouteError::NoMatch {
            path: "/outside".to_string(),
        };
        assert_eq!(err.to_string(), "No route template matches path '/outside'");
    }

    #[test]
    fn missing_param_names_placeholder_and_template() {
        let err = RouteError::MissingParam {
            name: "topicId",
            template: "/:courseId/topics/:topicId",
        };
        let msg = err.to_string();
        assert!(msg.contains(":topicId"));
        assert!(msg.contains("/:courseId/topics/:topicId"));
    }
}
