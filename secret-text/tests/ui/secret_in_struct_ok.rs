use secret_text::{RedactHint, Secret};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
struct DatabaseConfig {
    host: String,
    password: Secret,
}

fn main() {
    let config = DatabaseConfig {
        host: "db.internal".into(),
        password: Secret::with_hints("p@ss", [RedactHint::Redacted]),
    };

    let encoded = serde_json::to_string(&config).unwrap();
    assert_eq!(encoded, r#"{"host":"db.internal","password":"[REDACTED]"}"#);
    assert_eq!(format!("{}", config.password), "[REDACTED]");
}
