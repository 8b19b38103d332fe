//! Request parameter types.
//!
//! Pagination is lenient (bad values mean "unset"); the registration form is
//! strict and rejects anything that does not coerce.

use serde::Deserialize;
use service::errors::ServiceError;
use service::pagination::Page;
use service::persona::NewPersona;
use utoipa::{IntoParams, ToSchema};

/// `?limit=&offset=` on the list page. Kept as raw strings so that a
/// malformed value falls back to the default instead of rejecting the request.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Maximum number of rows; digits only, `0` or anything else means no limit
    pub limit: Option<String>,
    /// Rows to skip; digits only, `0` or anything else means no offset
    pub offset: Option<String>,
}

impl PageQuery {
    /// Collect from raw query pairs. A repeated key keeps its first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut q = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "limit" => &mut q.limit,
                "offset" => &mut q.offset,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        q
    }

    pub fn page(&self) -> Page {
        Page::from_params(self.limit.as_deref(), self.offset.as_deref())
    }
}

/// Registration form body (`application/x-www-form-urlencoded`).
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct RegistroForm {
    pub name: Option<String>,
    pub age: Option<String>,
    pub nationality: Option<String>,
}

impl RegistroForm {
    pub fn into_new_persona(self) -> Result<NewPersona, ServiceError> {
        NewPersona::parse(self.name.as_deref(), self.age.as_deref(), self.nationality.as_deref())
    }
}
