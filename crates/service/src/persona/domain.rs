use crate::errors::ServiceError;

/// Stored person record.
pub type Persona = models::persona::Model;

/// Registration input after type coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPersona {
    pub name: String,
    pub age: i32,
    pub nationality: String,
}

impl NewPersona {
    /// Coerce raw form values. Age must be an integer; name and nationality
    /// must be present and not blank. Age has no range check.
    pub fn parse(
        name: Option<&str>,
        age: Option<&str>,
        nationality: Option<&str>,
    ) -> Result<Self, ServiceError> {
        let name = required_text("name", name)?;
        let nationality = required_text("nationality", nationality)?;
        let age = age
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ServiceError::Validation("age is required".into()))?;
        let age = age
            .parse::<i32>()
            .map_err(|_| ServiceError::Validation(format!("age must be an integer, got {age:?}")))?;
        Ok(Self { name, age, nationality })
    }
}

fn required_text(field: &str, value: Option<&str>) -> Result<String, ServiceError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ServiceError::Validation(format!("{field} is required"))),
    }
}

/// Ids and ages of one nationality, aligned and in id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgeReport {
    pub ids: Vec<i32>,
    pub ages: Vec<i32>,
}

impl AgeReport {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<(i32, i32)> for AgeReport {
    fn from_iter<T: IntoIterator<Item = (i32, i32)>>(iter: T) -> Self {
        let (ids, ages) = iter.into_iter().unzip();
        Self { ids, ages }
    }
}
