//! Physical NIC speed and redundancy checks.

use core::fmt;
use std::sync::OnceLock;

use regex::Regex;

use super::types::NetworkAdapter;
use crate::diagnostics::Diagnostics;

/// Network type label the S2D bandwidth rule applies to.
const LIVE_MIGRATION: &str = "Live Migration";

/// Link speed in megabits per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LinkSpeed(u32);

impl LinkSpeed {
    /// Recommended minimum for any cluster NIC.
    pub const MIN_RECOMMENDED: LinkSpeed = LinkSpeed::from_gbps(10);
    /// Minimum for live migration / storage traffic with Storage Spaces Direct.
    pub const MIN_S2D_MIGRATION: LinkSpeed = LinkSpeed::from_gbps(25);

    pub const fn from_gbps(gbps: u32) -> Self {
        Self(gbps * 1000)
    }

    pub const fn from_mbps(mbps: u32) -> Self {
        Self(mbps)
    }

    /// Parse labels like `"10 Gbps"`, `"2.5Gbps"` or `"100 Mbps"`.
    pub fn parse(label: &str) -> Option<Self> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let pattern = PATTERN.get_or_init(|| {
            Regex::new(r"(?i)^\s*(\d+(?:\.\d+)?)\s*([GM])bps\s*$").expect("static regex")
        });

        let caps = pattern.captures(label)?;
        let value: f64 = caps[1].parse().ok()?;
        let mbps = if caps[2].eq_ignore_ascii_case("g") {
            value * 1000.0
        } else {
            value
        };
        Some(Self(mbps.round() as u32))
    }

    pub fn as_mbps(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for LinkSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 >= 1000 && self.0 % 1000 == 0 {
            write!(f, "{} Gbps", self.0 / 1000)
        } else {
            write!(f, "{} Mbps", self.0)
        }
    }
}

/// Adapters of one server grouped by network type, in first-seen order.
struct ServerNics<'a> {
    server: &'a str,
    by_type: Vec<(&'a str, Vec<&'a NetworkAdapter>)>,
}

fn group_by_server(adapters: &[NetworkAdapter]) -> Vec<ServerNics<'_>> {
    let mut servers: Vec<ServerNics<'_>> = Vec::new();

    for adapter in adapters {
        let idx = match servers.iter().position(|s| s.server == adapter.server) {
            Some(idx) => idx,
            None => {
                servers.push(ServerNics {
                    server: adapter.server.as_str(),
                    by_type: Vec::new(),
                });
                servers.len() - 1
            }
        };

        let by_type = &mut servers[idx].by_type;
        match by_type
            .iter_mut()
            .find(|(network_type, _)| *network_type == adapter.network_type)
        {
            Some((_, nics)) => nics.push(adapter),
            None => by_type.push((adapter.network_type.as_str(), vec![adapter])),
        }
    }

    servers
}

/// Check NIC speed and per-network redundancy for every server.
///
/// Never produces errors: slow or single NICs are warnings.
pub fn validate_nic_speed_requirements(adapters: &[NetworkAdapter], is_s2d: bool) -> Diagnostics {
    let mut result = Diagnostics::new();

    for server in group_by_server(adapters) {
        for (network_type, nics) in &server.by_type {
            for nic in nics {
                match LinkSpeed::parse(&nic.speed) {
                    Some(speed) if speed < LinkSpeed::MIN_RECOMMENDED => result.warn(format!(
                        "Server {} has a {speed} NIC for {network_type}. {} is the recommended minimum.",
                        server.server,
                        LinkSpeed::MIN_RECOMMENDED
                    )),
                    Some(_) => {}
                    None => result.warn(format!(
                        "Server {} has a NIC for {network_type} with unrecognized speed '{}'",
                        server.server, nic.speed
                    )),
                }
            }
        }

        for (network_type, nics) in &server.by_type {
            if nics.len() < 2 {
                result.warn(format!(
                    "Server {} has only {} NIC(s) for {network_type}. At least 2 NICs are recommended for redundancy.",
                    server.server,
                    nics.len()
                ));
            }
        }

        if is_s2d {
            let migration = server
                .by_type
                .iter()
                .find(|(network_type, _)| *network_type == LIVE_MIGRATION);
            if let Some((_, nics)) = migration {
                let has_fast_nic = nics.iter().any(|nic| {
                    LinkSpeed::parse(&nic.speed)
                        .is_some_and(|speed| speed >= LinkSpeed::MIN_S2D_MIGRATION)
                });
                if !has_fast_nic {
                    result.warn(format!(
                        "Server {} should have at least one 25 Gbps or faster NIC for Live Migration with S2D.",
                        server.server
                    ));
                    result.recommend(format!(
                        "For S2D deployments, configure at least 2x 25 Gbps NICs for Live Migration on server {}.",
                        server.server
                    ));
                }
            }
        }
    }

    if is_s2d {
        result.recommend("For Storage Spaces Direct (S2D), it's recommended to have at least 2x2 25 Gbps NICs (2 for VM traffic, 2 for storage/migration).");
    } else {
        result.recommend("For standard deployments, it's recommended to have at least 2x2 10 Gbps NICs (2 for VM traffic, 2 for storage/migration).");
    }

    tracing::debug!(
        adapters = adapters.len(),
        warnings = result.warnings().len(),
        is_s2d,
        "NIC requirements checked"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(server: &str, network_type: &str, speed: &str) -> Vec<NetworkAdapter> {
        vec![
            NetworkAdapter::new(server, network_type, speed),
            NetworkAdapter::new(server, network_type, speed),
        ]
    }

    #[test]
    fn test_parse_link_speed() {
        assert_eq!(LinkSpeed::parse("10 Gbps"), Some(LinkSpeed::from_gbps(10)));
        assert_eq!(LinkSpeed::parse("2.5Gbps"), Some(LinkSpeed::from_mbps(2500)));
        assert_eq!(LinkSpeed::parse("100 mbps"), Some(LinkSpeed::from_mbps(100)));
        assert_eq!(LinkSpeed::parse("fast"), None);
        assert_eq!(LinkSpeed::from_gbps(25).to_string(), "25 Gbps");
    }

    #[test]
    fn test_redundant_fast_nics_only_recommend() {
        let mut adapters = pair("HV01", "Management", "10 Gbps");
        adapters.extend(pair("HV01", "Live Migration", "25 Gbps"));
        let result = validate_nic_speed_requirements(&adapters, false);
        assert!(result.is_valid());
        assert!(result.warnings().is_empty());
        assert_eq!(result.recommendations().len(), 1);
        assert!(result.recommendations()[0].contains("10 Gbps"));
    }

    #[test]
    fn test_slow_and_single_nic_warnings() {
        let adapters = vec![NetworkAdapter::new("HV01", "Management", "1 Gbps")];
        let result = validate_nic_speed_requirements(&adapters, false);
        assert!(result.is_valid());
        assert_eq!(result.warnings().len(), 2);
        assert!(result.warnings()[0].contains("1 Gbps NIC for Management"));
        assert!(result.warnings()[1].contains("only 1 NIC(s)"));
    }

    #[test]
    fn test_s2d_requires_fast_migration() {
        let mut adapters = pair("HV01", "Live Migration", "10 Gbps");
        adapters.extend(pair("HV02", "Live Migration", "40 Gbps"));
        let result = validate_nic_speed_requirements(&adapters, true);
        assert_eq!(result.warnings().len(), 1);
        assert!(result.warnings()[0].starts_with("Server HV01"));
        assert_eq!(result.recommendations().len(), 2);
        assert!(result.recommendations()[1].contains("Storage Spaces Direct"));
    }

    #[test]
    fn test_unrecognized_speed_warns() {
        let adapters = pair("HV01", "VM Network", "fast");
        let result = validate_nic_speed_requirements(&adapters, false);
        assert_eq!(result.warnings().len(), 2);
        assert!(result.warnings()[0].contains("unrecognized speed 'fast'"));
    }
}
