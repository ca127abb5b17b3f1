//! Command Parsing
//!
//! Turns the positional command line into a typed [`Command`]. All argument
//! validation happens here, before anything touches the network.

use thiserror::Error;

/// Only collection served by the API
pub const RESOURCE: &str = "products";

/// Raw positional arguments of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub method: Option<String>,
    pub resource: Option<String>,
    pub params: Vec<String>,
}

impl Invocation {
    pub fn new(method: &str, resource: &str, params: &[&str]) -> Self {
        Self {
            method: Some(method.to_string()),
            resource: Some(resource.to_string()),
            params: params.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// What the user asked for
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// GET products
    List,
    /// GET products/<id>
    GetOne(u64),
    /// POST products <title> <price> <category>
    Create {
        title: String,
        price: f64,
        category: String,
    },
    /// DELETE products/<id>
    Delete(u64),
    /// No method or resource given
    Help,
    /// Malformed command line
    Usage(UsageError),
}

/// Usage and validation errors, reported without a network call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("Error: Solo se admite el recurso \"products\"")]
    UnsupportedResource(String),

    #[error("Error: Método HTTP \"{0}\" no soportado")]
    UnsupportedMethod(String),

    #[error("Error: ID de producto inválido")]
    InvalidId(String),

    #[error("Error: Debe especificar un ID de producto para eliminar")]
    MissingId,

    #[error("Error: Faltan parámetros para crear el producto")]
    MissingCreateParams,

    #[error("Error: El precio debe ser un número válido mayor a 0")]
    InvalidPrice(String),
}

impl UsageError {
    /// Hint printed after the error line
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::UnsupportedMethod(_) => Some("Métodos disponibles: GET, POST, DELETE"),
            Self::MissingId => Some("Uso: prodcli DELETE products/<productId>"),
            Self::MissingCreateParams => Some("Uso: prodcli POST products <title> <price> <category>"),
            _ => None,
        }
    }

    /// Whether the full help text follows the error
    pub fn shows_help(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedResource(_) | Self::UnsupportedMethod(_)
        )
    }
}

impl Command {
    /// Parse one invocation. Empty method or resource counts as missing.
    pub fn parse(inv: &Invocation) -> Self {
        let (Some(method), Some(resource)) = (present(&inv.method), present(&inv.resource)) else {
            return Self::Help;
        };

        match parse_command(method, resource, &inv.params) {
            Ok(cmd) => cmd,
            Err(err) => Self::Usage(err),
        }
    }

    /// Whether running this command performs an HTTP request
    pub fn needs_network(&self) -> bool {
        !matches!(self, Self::Help | Self::Usage(_))
    }
}

fn present(arg: &Option<String>) -> Option<&str> {
    arg.as_deref().filter(|s| !s.is_empty())
}

fn parse_command(method: &str, resource: &str, params: &[String]) -> Result<Command, UsageError> {
    if !resource.starts_with(RESOURCE) {
        return Err(UsageError::UnsupportedResource(resource.to_string()));
    }

    let id_segment = resource.split_once('/').map(|(_, rest)| rest);

    match method.to_ascii_uppercase().as_str() {
        "GET" => match id_segment {
            Some(segment) => Ok(Command::GetOne(parse_id(segment)?)),
            None => Ok(Command::List),
        },
        "POST" => {
            let [title, price, category, ..] = params else {
                return Err(UsageError::MissingCreateParams);
            };
            Ok(Command::Create {
                title: title.clone(),
                price: parse_price(price)?,
                category: category.clone(),
            })
        }
        "DELETE" => {
            let segment = id_segment.ok_or(UsageError::MissingId)?;
            Ok(Command::Delete(parse_id(segment)?))
        }
        _ => Err(UsageError::UnsupportedMethod(method.to_string())),
    }
}

/// Product IDs are non-negative integers
pub fn parse_id(segment: &str) -> Result<u64, UsageError> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(UsageError::InvalidId(segment.to_string()));
    }
    segment
        .parse()
        .map_err(|_| UsageError::InvalidId(segment.to_string()))
}

/// Prices must be positive and finite
pub fn parse_price(raw: &str) -> Result<f64, UsageError> {
    match raw.trim().parse::<f64>() {
        Ok(price) if price.is_finite() && price > 0.0 => Ok(price),
        _ => Err(UsageError::InvalidPrice(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(method: &str, resource: &str, params: &[&str]) -> Command {
        Command::parse(&Invocation::new(method, resource, params))
    }

    #[test]
    fn test_missing_arguments_show_help() {
        assert_eq!(Command::parse(&Invocation::default()), Command::Help);

        let only_method = Invocation {
            method: Some("GET".to_string()),
            ..Default::default()
        };
        assert_eq!(Command::parse(&only_method), Command::Help);
    }

    #[test]
    fn test_empty_arguments_show_help() {
        assert_eq!(parse("GET", "", &[]), Command::Help);
        assert_eq!(parse("", "products", &[]), Command::Help);
        assert_eq!(parse("", "", &["Widget", "9.99", "toys"]), Command::Help);
    }

    #[test]
    fn test_get_variants() {
        assert_eq!(parse("GET", "products", &[]), Command::List);
        assert_eq!(parse("get", "products/5", &[]), Command::GetOne(5));
        assert_eq!(
            parse("GET", "products/", &[]),
            Command::Usage(UsageError::InvalidId(String::new()))
        );
        assert_eq!(
            parse("GET", "products/abc", &[]),
            Command::Usage(UsageError::InvalidId("abc".to_string()))
        );
        assert_eq!(
            parse("GET", "products/5/reviews", &[]),
            Command::Usage(UsageError::InvalidId("5/reviews".to_string()))
        );
    }

    #[test]
    fn test_resource_checked_before_method() {
        assert_eq!(
            parse("PATCH", "users", &[]),
            Command::Usage(UsageError::UnsupportedResource("users".to_string()))
        );
        assert_eq!(
            parse("PATCH", "products", &[]),
            Command::Usage(UsageError::UnsupportedMethod("PATCH".to_string()))
        );
    }

    #[test]
    fn test_create() {
        assert_eq!(
            parse("Post", "products", &["Widget", "9.99", "toys", "ignored"]),
            Command::Create {
                title: "Widget".to_string(),
                price: 9.99,
                category: "toys".to_string(),
            }
        );
        assert_eq!(
            parse("POST", "products", &["Widget", "9.99"]),
            Command::Usage(UsageError::MissingCreateParams)
        );
        assert_eq!(
            parse("POST", "products", &["Widget", "0", "toys"]),
            Command::Usage(UsageError::InvalidPrice("0".to_string()))
        );
    }

    #[test]
    fn test_delete() {
        assert_eq!(parse("delete", "products/7", &[]), Command::Delete(7));
        assert_eq!(
            parse("DELETE", "products", &[]),
            Command::Usage(UsageError::MissingId)
        );
        assert_eq!(
            parse("DELETE", "products/x7", &[]),
            Command::Usage(UsageError::InvalidId("x7".to_string()))
        );
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("300"), Ok(300.0));
        assert_eq!(parse_price(" 12.5 "), Ok(12.5));
        assert!(parse_price("-1").is_err());
        assert!(parse_price("NaN").is_err());
        assert!(parse_price("inf").is_err());
        assert!(parse_price("1e400").is_err());
        assert!(parse_price("abc").is_err());
    }

    #[test]
    fn test_usage_error_presentation() {
        let err = UsageError::UnsupportedMethod("PUT".to_string());
        assert!(err.to_string().contains("PUT"));
        assert!(err.shows_help());
        assert!(err.hint().unwrap().contains("DELETE"));

        assert!(!UsageError::MissingId.shows_help());
        assert!(UsageError::InvalidId("x".to_string()).hint().is_none());
        assert!(!Command::Help.needs_network());
        assert!(Command::List.needs_network());
    }
}
