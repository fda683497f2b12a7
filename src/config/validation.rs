//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check referential integrity (pathways reference configured networks)
//! - Validate value ranges (nonzero eids, parseable URLs and addresses)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: OftConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use std::fmt;

use alloy::primitives::Address;

use crate::config::schema::OftConfig;

/// A single semantic violation, with the config path that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn push(errors: &mut Vec<ValidationError>, field: impl Into<String>, message: impl Into<String>) {
    errors.push(ValidationError {
        field: field.into(),
        message: message.into(),
    });
}

fn check_address(errors: &mut Vec<ValidationError>, field: String, value: &str) {
    if value.parse::<Address>().is_err() {
        push(errors, field, format!("invalid address '{value}'"));
    }
}

/// Checks the whole config and reports every violation found.
pub fn validate_config(config: &OftConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.networks.is_empty() {
        push(&mut errors, "networks", "at least one network must be configured");
    }

    for (name, network) in &config.networks {
        if network.eid == 0 {
            push(
                &mut errors,
                format!("networks.{name}.eid"),
                "endpoint id must be nonzero",
            );
        }
        if let Err(e) = network.rpc_url.parse::<url::Url>() {
            push(
                &mut errors,
                format!("networks.{name}.rpc_url"),
                format!("invalid RPC URL: {e}"),
            );
        }
    }

    for (i, pathway) in config.pathways.iter().enumerate() {
        let field = |name: &str| format!("pathways[{i}].{name}");

        for (end, network) in [("from", &pathway.from), ("to", &pathway.to)] {
            if !config.networks.contains_key(network) {
                push(
                    &mut errors,
                    field(end),
                    format!("references unconfigured network '{network}'"),
                );
            }
        }
        if pathway.from == pathway.to {
            push(&mut errors, field("to"), "pathway endpoints must differ");
        }

        check_address(&mut errors, field("send_library"), &pathway.send_library);
        check_address(&mut errors, field("receive_library"), &pathway.receive_library);
        check_address(&mut errors, field("executor"), &pathway.executor);

        if pathway.required_dvns.is_empty() {
            push(
                &mut errors,
                field("required_dvns"),
                "at least one required DVN",
            );
        }
        for dvn in pathway.required_dvns.iter().chain(&pathway.optional_dvns) {
            check_address(&mut errors, field("dvns"), dvn);
        }
        if usize::from(pathway.optional_dvn_threshold) > pathway.optional_dvns.len() {
            push(
                &mut errors,
                field("optional_dvn_threshold"),
                "threshold exceeds optional DVN count",
            );
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::PathwayConfig;

    const DVN: &str = "0x88B27057A9e00c5F05DDa29241027afF63f9e6e0";
    const LIB: &str = "0xcc1ae8Cf5D3904Cef3360A9532B477529b177cCE";

    fn valid_pathway() -> PathwayConfig {
        PathwayConfig {
            from: "sepolia-testnet".to_string(),
            to: "rootstock-testnet".to_string(),
            send_library: LIB.to_string(),
            receive_library: LIB.to_string(),
            executor: LIB.to_string(),
            send_confirmations: 2,
            receive_confirmations: 1,
            required_dvns: vec![DVN.to_string()],
            optional_dvns: Vec::new(),
            optional_dvn_threshold: 0,
            max_message_size: 10_000,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&OftConfig::default()).is_ok());
    }

    #[test]
    fn test_valid_pathway_passes() {
        let mut config = OftConfig::default();
        config.pathways.push(valid_pathway());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_all_violations_reported_at_once() {
        let mut config = OftConfig::default();
        let mut pathway = valid_pathway();
        pathway.from = "unknown-net".to_string();
        pathway.executor = "not-an-address".to_string();
        pathway.required_dvns.clear();
        config.pathways.push(pathway);

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.field == "pathways[0].from"));
        assert!(errors.iter().any(|e| e.field == "pathways[0].executor"));
        assert!(errors.iter().any(|e| e.field == "pathways[0].required_dvns"));
    }

    #[test]
    fn test_same_endpoints_rejected() {
        let mut config = OftConfig::default();
        let mut pathway = valid_pathway();
        pathway.to = pathway.from.clone();
        config.pathways.push(pathway);

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.message.contains("must differ")));
    }

    #[test]
    fn test_dvn_threshold_bound() {
        let mut config = OftConfig::default();
        let mut pathway = valid_pathway();
        pathway.optional_dvn_threshold = 1;
        config.pathways.push(pathway);

        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.field == "pathways[0].optional_dvn_threshold"));
    }

    #[test]
    fn test_zero_eid_rejected() {
        let mut config = OftConfig::default();
        config
            .networks
            .get_mut("sepolia-testnet")
            .unwrap()
            .eid = 0;

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.field == "networks.sepolia-testnet.eid"));
    }
}
