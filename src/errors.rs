use serde::Serialize;
use solana_sdk::pubkey::ParsePubkeyError;
use thiserror::Error;

/// Fatal conditions of one buy request. None are retried internally; each
/// truncates the response at the last completed stage.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("onramp funding failed: {0}")]
    FundingFailed(String),

    #[error("no swap route found")]
    NoRouteFound,

    #[error("malformed address or mint: {0}")]
    MalformedKey(#[from] ParsePubkeyError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ServiceError {
    /// HTTP-equivalent status for transport layers sitting above this core.
    pub fn status(&self) -> u16 {
        match self {
            Self::InvalidRequest(_) => 400,
            Self::FundingFailed(_) | Self::NoRouteFound => 502,
            Self::MalformedKey(_) | Self::Internal(_) => 500,
        }
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_string(),
            status: self.status(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub status: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_match_taxonomy() {
        use solana_sdk::pubkey::Pubkey;
        use std::str::FromStr;

        assert_eq!(ServiceError::InvalidRequest("x".into()).status(), 400);
        assert_eq!(ServiceError::FundingFailed("x".into()).status(), 502);
        assert_eq!(ServiceError::NoRouteFound.status(), 502);
        let parse_err = Pubkey::from_str("not-a-pubkey").unwrap_err();
        assert_eq!(ServiceError::MalformedKey(parse_err).status(), 500);
        assert_eq!(
            ServiceError::Internal(anyhow::anyhow!("boom")).status(),
            500
        );
    }
}
