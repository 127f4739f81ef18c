use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ───── Database Model ───────────────────────────────────────────────

/// A stored student record. Serialized with the wire names the frontend
/// already speaks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Student {
    #[schema(example = 1)]
    pub id: i32,

    #[serde(rename = "nombre", alias = "firstName")]
    pub first_name: String,

    #[serde(rename = "apellido", alias = "lastName")]
    pub last_name: String,

    pub email: String,

    #[serde(rename = "fechaNacimiento", alias = "birthDate", deserialize_with = "birth_date::deserialize")]
    pub birth_date: NaiveDate,
}

// ───── Input ────────────────────────────────────────────────────────

/// Payload for both create and full-overwrite update. Unknown keys, such as
/// the legacy `isComplete` flag, are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewStudent {
    #[serde(rename = "nombre", alias = "firstName")]
    pub first_name: String,

    #[serde(rename = "apellido", alias = "lastName")]
    pub last_name: String,

    pub email: String,

    #[serde(rename = "fechaNacimiento", alias = "birthDate", deserialize_with = "birth_date::deserialize")]
    pub birth_date: NaiveDate,
}

impl NewStudent {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        birth_date: NaiveDate,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            birth_date,
        }
    }

    /// Builds the record the store would hold for this payload under `id`.
    pub fn into_student(self, id: i32) -> Student {
        Student {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            birth_date: self.birth_date,
        }
    }
}

impl From<Student> for NewStudent {
    fn from(student: Student) -> Self {
        Self {
            first_name: student.first_name,
            last_name: student.last_name,
            email: student.email,
            birth_date: student.birth_date,
        }
    }
}

// ───── Helper Functions ─────────────────────────────────────────────

/// Accepts `YYYY-MM-DD` as well as a full ISO date-time, keeping only the
/// calendar date.
mod birth_date {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::{de, Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(raw.trim()).ok_or_else(|| {
            de::Error::custom(format!("invalid birth date '{}', expected YYYY-MM-DD", raw))
        })
    }

    pub(super) fn parse(raw: &str) -> Option<NaiveDate> {
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(date);
        }
        if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
            return Some(date_time.date_naive());
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|dt| dt.date())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn student_serializes_with_wire_names() {
        let student = NewStudent::new("Ana", "Diaz", "a@x.com", date(2000, 1, 1)).into_student(3);

        let value = serde_json::to_value(&student).unwrap();

        assert_eq!(value, json!({
            "id": 3,
            "nombre": "Ana",
            "apellido": "Diaz",
            "email": "a@x.com",
            "fechaNacimiento": "2000-01-01"
        }));
    }

    #[test]
    fn new_student_accepts_english_aliases() {
        let payload = json!({
            "firstName": "Ana",
            "lastName": "Diaz",
            "email": "a@x.com",
            "birthDate": "2000-01-01"
        });

        let parsed: NewStudent = serde_json::from_value(payload).unwrap();

        assert_eq!(parsed, NewStudent::new("Ana", "Diaz", "a@x.com", date(2000, 1, 1)));
    }

    #[test]
    fn new_student_ignores_completeness_flag() {
        let payload = json!({
            "nombre": "Luis",
            "apellido": "Perez",
            "email": "l@x.com",
            "fechaNacimiento": "1999-12-31",
            "isComplete": true
        });

        let parsed: NewStudent = serde_json::from_value(payload).unwrap();

        assert_eq!(parsed.first_name, "Luis");
        assert_eq!(parsed.birth_date, date(1999, 12, 31));
    }

    #[test]
    fn new_student_requires_every_field() {
        let payload = json!({
            "nombre": "Ana",
            "apellido": "Diaz",
            "fechaNacimiento": "2000-01-01"
        });

        assert!(serde_json::from_value::<NewStudent>(payload).is_err());
    }

    #[test]
    fn birth_date_accepts_date_time_forms() {
        assert_eq!(birth_date::parse("2000-01-01T00:00:00"), Some(date(2000, 1, 1)));
        assert_eq!(birth_date::parse("2000-01-01T13:45:10.123"), Some(date(2000, 1, 1)));
        assert_eq!(birth_date::parse("2000-01-01T00:00:00Z"), Some(date(2000, 1, 1)));
        assert_eq!(birth_date::parse("2000-02-30"), None);
        assert_eq!(birth_date::parse("yesterday"), None);
    }
}
