//! Schema declaration errors
//!
//! These are programmer errors in the code that declares a form, never bad
//! user input. User input failures are [`ValidationError`](crate::foundation::ValidationError)
//! data inside an [`ErrorMap`](crate::foundation::ErrorMap).

/// A form schema that cannot be built or queried as asked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// The same field was declared twice.
    #[error("form `{form}`: field `{field}` is declared twice")]
    DuplicateField {
        /// Form name.
        form: String,
        /// Field name.
        field: String,
    },

    /// A binding targets a field the form does not declare.
    #[error("form `{form}`: binding targets undeclared field `{field}`")]
    UndeclaredField {
        /// Form name.
        form: String,
        /// Field name.
        field: String,
    },

    /// A rule reads a sibling the form does not declare.
    #[error("form `{form}`: a rule on `{field}` reads undeclared field `{read}`")]
    UndeclaredRead {
        /// Form name.
        form: String,
        /// Field the rule is bound to.
        field: String,
        /// The undeclared sibling.
        read: String,
    },

    /// A gate reads a discriminant the form does not declare.
    #[error("form `{form}`: the gate on `{field}` reads undeclared discriminant `{discriminant}`")]
    UndeclaredDiscriminant {
        /// Form name.
        form: String,
        /// Field the gated binding targets.
        field: String,
        /// The undeclared discriminant field.
        discriminant: String,
    },

    /// A query names a field the form does not declare.
    #[error("form `{form}` has no field `{field}`")]
    UnknownField {
        /// Form name.
        form: String,
        /// Field name.
        field: String,
    },
}
