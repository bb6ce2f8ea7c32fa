//! RPC Error Types
//!
//! Maps application errors to JSON-RPC error codes.

use baton_core::domain::ReservationError;
use baton_core::error::AppError;
use jsonrpsee::types::ErrorObjectOwned;
use thiserror::Error;

/// RPC Error Codes
pub mod code {
    pub const VALIDATION_ERROR: i32 = 4000;
    pub const NOT_FOUND: i32 = 4001;
    pub const CONFLICT: i32 = 4002;
    pub const FORBIDDEN: i32 = 4003;
    pub const INTERNAL_ERROR: i32 = 5000;
}

/// Convert AppError to JSON-RPC ErrorObject
pub fn to_rpc_error(err: AppError) -> ErrorObjectOwned {
    match err {
        AppError::Reservation(e) => reservation_error(e),
        AppError::Serialization(e) => {
            ErrorObjectOwned::owned(code::VALIDATION_ERROR, e.to_string(), None::<()>)
        }
        AppError::Io(e) => ErrorObjectOwned::owned(code::INTERNAL_ERROR, e.to_string(), None::<()>),
        AppError::Delivery(msg) => ErrorObjectOwned::owned(code::INTERNAL_ERROR, msg, None::<()>),
    }
}

fn reservation_error(err: ReservationError) -> ErrorObjectOwned {
    let code = match &err {
        ReservationError::InvalidResource => code::VALIDATION_ERROR,
        ReservationError::NotFound(_) => code::NOT_FOUND,
        ReservationError::AlreadyOwner { .. } | ReservationError::AlreadyWaiting { .. } => {
            code::CONFLICT
        }
        ReservationError::NotOwner { .. } => code::FORBIDDEN,
    };
    ErrorObjectOwned::owned(code, err.to_string(), None::<()>)
}

/// Failures while bringing the server up
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to build server on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to register method {method}: {reason}")]
    Register { method: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reservation_error_codes() {
        let cases = [
            (ReservationError::InvalidResource, code::VALIDATION_ERROR),
            (ReservationError::NotFound("r".to_string()), code::NOT_FOUND),
            (
                ReservationError::AlreadyOwner {
                    resource: "r".to_string(),
                    user: "u".to_string(),
                },
                code::CONFLICT,
            ),
            (
                ReservationError::AlreadyWaiting {
                    resource: "r".to_string(),
                    user: "u".to_string(),
                },
                code::CONFLICT,
            ),
            (
                ReservationError::NotOwner {
                    resource: "r".to_string(),
                    user: "u".to_string(),
                },
                code::FORBIDDEN,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(to_rpc_error(AppError::from(err)).code(), expected);
        }
    }

    #[test]
    fn test_internal_errors() {
        let err = to_rpc_error(AppError::Delivery("down".to_string()));

        assert_eq!(err.code(), code::INTERNAL_ERROR);
        assert_eq!(err.message(), "down");
    }

    #[test]
    fn test_io_and_serialization_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        assert_eq!(to_rpc_error(AppError::from(io)).code(), code::INTERNAL_ERROR);

        let parse = baton_core::application::Locale::from_json("{").unwrap_err();
        assert!(matches!(parse, AppError::Serialization(_)));
        assert_eq!(to_rpc_error(parse).code(), code::VALIDATION_ERROR);
    }
}
