use serde::Deserialize;

/// Body of `POST /users/create`. Both fields default to empty so an absent
/// key falls through to the blank-value validation instead of a decode
/// rejection; an `id` key in the body is ignored.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
}

/// Query string of `DELETE /users/delete`. The id stays a raw string here so
/// the handler can tell a missing parameter from a non-numeric one.
#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    pub id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_decode_to_empty_strings() {
        let req: CreateUserRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.name, "");
        assert_eq!(req.surname, "");
    }

    #[test]
    fn id_in_body_is_ignored() {
        let req: CreateUserRequest =
            serde_json::from_str(r#"{"id": 99, "name": "Ada", "surname": "Lovelace"}"#).unwrap();
        assert_eq!(req.name, "Ada");
        assert_eq!(req.surname, "Lovelace");
    }
}
