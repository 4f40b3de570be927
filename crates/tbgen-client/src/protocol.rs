//! Wire-format types for the generation service's HTTP/JSON contract
//!
//! Response bodies are deserialized into the structs here and then validated
//! into the `tbgen-core` domain types. Anything the contract forbids
//! (non-positive widths, out-of-range percentages, zero attempts) becomes an
//! [`Error::Schema`] at this boundary instead of leaking into the view layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use tbgen_core::error::{Error, Result};
use tbgen_core::types::{
    CoverageReport, FsmCoverage, GenerateResult, HealthStatus, ModuleDescriptor, PortDescriptor,
    PortDirection,
};

/// Body of `POST /api/generate`.
///
/// `module_name` and `simulator` are accepted by the service but optional;
/// they are omitted from the JSON when unset.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest<'a> {
    pub rtl: &'a str,
    pub max_retries: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulator: Option<&'a str>,
}

/// Structured error payload the service sends on non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PortInfo {
    pub direction: String,
    pub name: String,
    pub width: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModuleInfo {
    pub name: String,
    pub ports: Vec<PortInfo>,
    #[serde(default)]
    pub parameters: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FsmCoverageInfo {
    pub declared_states: Vec<i64>,
    pub visited_states: Vec<i64>,
    pub coverage_pct: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoverageInfo {
    pub toggle_coverage: BTreeMap<String, f64>,
    pub overall_toggle: f64,
    #[serde(default)]
    pub fsm_coverage: Option<FsmCoverageInfo>,
    pub total_score: f64,
}

/// Body of a successful `POST /api/generate` response
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    pub testbench: String,
    pub description: String,
    pub module: ModuleInfo,
    pub sim_success: bool,
    pub sim_output: String,
    pub sim_errors: Vec<String>,
    #[serde(default)]
    pub coverage: Option<CoverageInfo>,
    pub attempts: i64,
}

/// Body of `GET /api/health`
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub iverilog: bool,
    pub verilator: bool,
    pub gemini_configured: bool,
}

impl HealthResponse {
    pub fn into_status(self) -> HealthStatus {
        HealthStatus {
            status: self.status,
            iverilog_available: self.iverilog,
            verilator_available: self.verilator,
            llm_configured: self.gemini_configured,
        }
    }
}

fn check_pct(field: &str, value: f64) -> Result<f64> {
    if (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(Error::schema(format!(
            "{field} must be a percentage in [0,100], got {value}"
        )))
    }
}

impl PortInfo {
    fn into_port(self) -> Result<PortDescriptor> {
        let direction = match self.direction.as_str() {
            "input" => PortDirection::Input,
            "output" => PortDirection::Output,
            "inout" => PortDirection::Inout,
            other => {
                return Err(Error::schema(format!("unknown port direction '{other}'")));
            }
        };
        if self.name.is_empty() {
            return Err(Error::schema("port name must not be empty"));
        }
        if self.width < 1 {
            return Err(Error::schema(format!(
                "port '{}' width must be >= 1, got {}",
                self.name, self.width
            )));
        }
        Ok(PortDescriptor {
            direction,
            name: self.name,
            width: self.width as u32,
        })
    }
}

impl ModuleInfo {
    fn into_module(self) -> Result<ModuleDescriptor> {
        if self.name.is_empty() {
            return Err(Error::schema("module name must not be empty"));
        }
        let ports = self
            .ports
            .into_iter()
            .map(PortInfo::into_port)
            .collect::<Result<Vec<_>>>()?;
        Ok(ModuleDescriptor {
            name: self.name,
            ports,
            parameters: self.parameters,
        })
    }
}

impl CoverageInfo {
    fn into_report(self) -> Result<CoverageReport> {
        let mut toggle_coverage = BTreeMap::new();
        for (signal, pct) in self.toggle_coverage {
            let pct = check_pct(&format!("toggle_coverage['{signal}']"), pct)?;
            toggle_coverage.insert(signal, pct);
        }
        let overall_toggle = check_pct("overall_toggle", self.overall_toggle)?;
        let total_score = check_pct("total_score", self.total_score)?;
        let fsm_coverage = match self.fsm_coverage {
            Some(fsm) => Some(FsmCoverage {
                coverage_pct: check_pct("fsm_coverage.coverage_pct", fsm.coverage_pct)?,
                declared_states: fsm.declared_states,
                // Order preserved verbatim; the subset invariant is checked
                // nowhere -- violations are rendered as anomalies downstream.
                visited_states: fsm.visited_states,
            }),
            None => None,
        };
        Ok(CoverageReport {
            toggle_coverage,
            overall_toggle,
            fsm_coverage,
            total_score,
        })
    }
}

impl GenerateResponse {
    /// Validate the wire shape into the trusted domain type
    pub fn into_result(self) -> Result<GenerateResult> {
        if self.attempts < 1 {
            return Err(Error::schema(format!(
                "attempts must be >= 1, got {}",
                self.attempts
            )));
        }
        Ok(GenerateResult {
            testbench: self.testbench,
            description: self.description,
            module: self.module.into_module()?,
            sim_success: self.sim_success,
            sim_output: self.sim_output,
            sim_errors: self.sim_errors,
            coverage: self.coverage.map(CoverageInfo::into_report).transpose()?,
            attempts: self.attempts as u32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_response_json() -> &'static str {
        r#"{
            "testbench": "module counter_tb;\nendmodule",
            "description": "Exercises reset and count-up behavior",
            "module": {
                "name": "counter",
                "ports": [
                    {"direction": "input", "name": "clk", "width": 1},
                    {"direction": "input", "name": "rst_n", "width": 1},
                    {"direction": "output", "name": "count", "width": 8}
                ],
                "parameters": ["WIDTH"]
            },
            "sim_success": true,
            "sim_output": "VCD info: dumpfile dump.vcd opened\nAll checks passed",
            "sim_errors": [],
            "coverage": {
                "toggle_coverage": {"clk": 100.0, "count": 87.5, "rst_n": 50.0},
                "overall_toggle": 79.2,
                "fsm_coverage": {
                    "declared_states": [0, 1, 2, 3],
                    "visited_states": [0, 1, 3],
                    "coverage_pct": 75.0
                },
                "total_score": 81.3
            },
            "attempts": 2
        }"#
    }

    #[test]
    fn test_generate_response_parses_field_for_field() {
        let resp: GenerateResponse = serde_json::from_str(full_response_json()).unwrap();
        let result = resp.into_result().unwrap();

        assert_eq!(result.module.name, "counter");
        assert_eq!(result.module.parameters, vec!["WIDTH"]);
        assert_eq!(result.module.ports.len(), 3);
        assert_eq!(result.module.ports[2].name, "count");
        assert_eq!(result.module.ports[2].width, 8);
        assert_eq!(result.module.ports[2].direction, PortDirection::Output);
        assert!(result.sim_success);
        assert!(result.sim_errors.is_empty());
        assert_eq!(result.attempts, 2);

        let coverage = result.coverage.expect("coverage present");
        assert_eq!(coverage.overall_toggle, 79.2);
        assert_eq!(coverage.total_score, 81.3);
        assert_eq!(coverage.toggle_coverage["count"], 87.5);

        let fsm = coverage.fsm_coverage.expect("fsm coverage present");
        assert_eq!(fsm.declared_states, vec![0, 1, 2, 3]);
        assert_eq!(fsm.visited_states, vec![0, 1, 3]);
        assert_eq!(fsm.coverage_pct, 75.0);
    }

    #[test]
    fn test_null_coverage_is_accepted() {
        let json = r#"{
            "testbench": "tb",
            "description": "d",
            "module": {"name": "m", "ports": [], "parameters": []},
            "sim_success": false,
            "sim_output": "",
            "sim_errors": ["compile error"],
            "coverage": null,
            "attempts": 3
        }"#;
        let result: GenerateResult = serde_json::from_str::<GenerateResponse>(json)
            .unwrap()
            .into_result()
            .unwrap();
        assert!(result.coverage.is_none());
        assert_eq!(result.sim_errors, vec!["compile error"]);
    }

    #[test]
    fn test_zero_attempts_is_schema_error() {
        let json = r#"{
            "testbench": "tb",
            "description": "d",
            "module": {"name": "m", "ports": [], "parameters": []},
            "sim_success": true,
            "sim_output": "",
            "sim_errors": [],
            "coverage": null,
            "attempts": 0
        }"#;
        let err = serde_json::from_str::<GenerateResponse>(json)
            .unwrap()
            .into_result()
            .unwrap_err();
        assert!(matches!(err, Error::Schema { .. }), "got {err:?}");
    }

    #[test]
    fn test_bad_port_direction_is_schema_error() {
        let port = PortInfo {
            direction: "bidirectional".to_string(),
            name: "bus".to_string(),
            width: 16,
        };
        let err = port.into_port().unwrap_err();
        assert!(err.to_string().contains("bidirectional"));
    }

    #[test]
    fn test_non_positive_width_is_schema_error() {
        let port = PortInfo {
            direction: "input".to_string(),
            name: "clk".to_string(),
            width: 0,
        };
        assert!(matches!(
            port.into_port().unwrap_err(),
            Error::Schema { .. }
        ));
    }

    #[test]
    fn test_out_of_range_percentage_is_schema_error() {
        let json = r#"{
            "toggle_coverage": {"clk": 100.0},
            "overall_toggle": 104.5,
            "fsm_coverage": null,
            "total_score": 50.0
        }"#;
        let err = serde_json::from_str::<CoverageInfo>(json)
            .unwrap()
            .into_report()
            .unwrap_err();
        assert!(err.to_string().contains("overall_toggle"));
    }

    #[test]
    fn test_visited_superset_is_not_rejected() {
        // visited_states containing codes absent from declared_states is a
        // contract violation by the server, but the client renders it as an
        // anomaly instead of failing the whole response.
        let json = r#"{
            "toggle_coverage": {},
            "overall_toggle": 0.0,
            "fsm_coverage": {
                "declared_states": [0, 1],
                "visited_states": [0, 1, 7],
                "coverage_pct": 100.0
            },
            "total_score": 0.0
        }"#;
        let report = serde_json::from_str::<CoverageInfo>(json)
            .unwrap()
            .into_report()
            .unwrap();
        assert_eq!(report.fsm_coverage.unwrap().visited_states, vec![0, 1, 7]);
    }

    #[test]
    fn test_generate_request_omits_unset_optionals() {
        let req = GenerateRequest {
            rtl: "module m; endmodule",
            max_retries: 3,
            module_name: None,
            simulator: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"max_retries\":3"));
        assert!(!json.contains("module_name"));
        assert!(!json.contains("simulator"));
    }

    #[test]
    fn test_health_response_maps_to_status() {
        let json = r#"{"status": "ok", "iverilog": true, "verilator": false, "gemini_configured": true}"#;
        let health = serde_json::from_str::<HealthResponse>(json)
            .unwrap()
            .into_status();
        assert_eq!(health.status, "ok");
        assert!(health.iverilog_available);
        assert!(!health.verilator_available);
        assert!(health.llm_configured);
    }
}
