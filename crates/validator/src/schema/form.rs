//! Form schemas and their builder

use std::borrow::Cow;

use indexmap::IndexMap;

use super::binding::Binding;
use super::error::SchemaError;

/// A declared form: its fields, their labels and the bindings over them.
///
/// The declared field set is the typed interface of the value map. Every
/// binding, every sibling a rule reads and every gate discriminant is
/// checked against it when the schema is built.
///
/// # Examples
///
/// ```
/// use agriform_validator::foundation::ValueMap;
/// use agriform_validator::schema::{Binding, FormSchema};
/// use agriform_validator::validators::{email, required};
///
/// let login = FormSchema::builder("login")
///     .field("email", "Email")
///     .field("password", "Password")
///     .bind(Binding::new("email").check(required()).check(email()))
///     .bind(Binding::new("password").check(required()))
///     .build()
///     .unwrap();
///
/// let result = login.validate(&ValueMap::new().with("email", "not-an-email"));
/// assert!(!result.is_valid);
/// assert_eq!(result.errors.messages("email"), ["Please enter a valid email address"]);
/// assert_eq!(result.errors.messages("password"), ["Password is required"]);
/// ```
#[derive(Debug)]
pub struct FormSchema {
    pub(crate) name: Cow<'static, str>,
    pub(crate) fields: IndexMap<Cow<'static, str>, Cow<'static, str>>,
    pub(crate) bindings: Vec<Binding>,
}

impl FormSchema {
    /// Starts declaring a form called `name`.
    pub fn builder(name: impl Into<Cow<'static, str>>) -> FormSchemaBuilder {
        FormSchemaBuilder {
            name: name.into(),
            fields: Vec::new(),
            bindings: Vec::new(),
        }
    }

    /// The form's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared field names, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(AsRef::as_ref)
    }

    /// Human label of a declared field.
    #[must_use]
    pub fn label(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(AsRef::as_ref)
    }

    /// Returns true if `field` is declared.
    #[must_use]
    pub fn declares(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// The bindings, in declaration order.
    #[must_use]
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub(crate) fn unknown_field(&self, field: &str) -> SchemaError {
        SchemaError::UnknownField {
            form: self.name.to_string(),
            field: field.to_owned(),
        }
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`FormSchema`].
#[derive(Debug)]
#[must_use = "builder methods must be chained or built"]
pub struct FormSchemaBuilder {
    name: Cow<'static, str>,
    fields: Vec<(Cow<'static, str>, Cow<'static, str>)>,
    bindings: Vec<Binding>,
}

impl FormSchemaBuilder {
    /// Declares a field and its human label.
    pub fn field(
        mut self,
        name: impl Into<Cow<'static, str>>,
        label: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.fields.push((name.into(), label.into()));
        self
    }

    /// Adds a binding. Bindings for the same field run in the order added.
    pub fn bind(mut self, binding: Binding) -> Self {
        self.bindings.push(binding);
        self
    }

    /// Checks the declaration and builds the schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when a field is declared twice, or when a
    /// binding, a rule's sibling read, or a gate names an undeclared field.
    pub fn build(self) -> Result<FormSchema, SchemaError> {
        let form = || self.name.to_string();

        let mut fields = IndexMap::with_capacity(self.fields.len());
        for (name, label) in self.fields {
            if fields.contains_key(&name) {
                return Err(SchemaError::DuplicateField {
                    form: form(),
                    field: name.into_owned(),
                });
            }
            fields.insert(name, label);
        }

        for binding in &self.bindings {
            let field = binding.field();
            if !fields.contains_key(field) {
                return Err(SchemaError::UndeclaredField {
                    form: form(),
                    field: field.to_owned(),
                });
            }
            if let Some(read) = binding.reads().into_iter().find(|r| !fields.contains_key(*r)) {
                return Err(SchemaError::UndeclaredRead {
                    form: form(),
                    field: field.to_owned(),
                    read: read.to_owned(),
                });
            }
            if let Some(gate) = binding.gate().filter(|g| !fields.contains_key(g.field())) {
                return Err(SchemaError::UndeclaredDiscriminant {
                    form: form(),
                    field: field.to_owned(),
                    discriminant: gate.field().to_owned(),
                });
            }
        }

        Ok(FormSchema {
            name: self.name,
            fields,
            bindings: self.bindings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cross_field::{CompareField, Relation};
    use crate::discriminant::{Discriminant, Gate};
    use crate::validators::required;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Method {
        Card,
    }

    impl Discriminant for Method {
        const ALL: &'static [Self] = &[Self::Card];

        fn as_str(self) -> &'static str {
            "credit_card"
        }
    }

    #[test]
    fn labels_and_declaration_order() {
        let schema = FormSchema::builder("login")
            .field("email", "Email")
            .field("password", "Password")
            .build()
            .unwrap();
        assert_eq!(schema.fields().collect::<Vec<_>>(), ["email", "password"]);
        assert_eq!(schema.label("password"), Some("Password"));
        assert_eq!(schema.label("missing"), None);
        assert_eq!(schema.name(), "login");
    }

    #[test]
    fn duplicate_field_is_rejected() {
        let err = FormSchema::builder("f")
            .field("a", "A")
            .field("a", "A again")
            .build()
            .unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateField { ref field, .. } if field == "a"));
    }

    #[test]
    fn binding_on_undeclared_field_is_rejected() {
        let err = FormSchema::builder("f")
            .field("a", "A")
            .bind(Binding::new("b").check(required()))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::UndeclaredField {
                form: "f".into(),
                field: "b".into()
            }
        );
    }

    #[test]
    fn rule_reading_undeclared_sibling_is_rejected() {
        let err = FormSchema::builder("f")
            .field("min", "Min")
            .bind(Binding::new("min").rule(CompareField::new("max", Relation::Less, "m")))
            .build()
            .unwrap_err();
        assert!(matches!(err, SchemaError::UndeclaredRead { ref read, .. } if read == "max"));
    }

    #[test]
    fn gate_on_undeclared_discriminant_is_rejected() {
        let err = FormSchema::builder("payment")
            .field("cvv", "CVV")
            .bind(
                Binding::new("cvv")
                    .check(required())
                    .when(Gate::on::<Method>("paymentMethod", |_| true)),
            )
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            SchemaError::UndeclaredDiscriminant { ref discriminant, .. } if discriminant == "paymentMethod"
        ));
    }
}
