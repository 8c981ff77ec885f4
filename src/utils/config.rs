//! Configuration and constants for the CLI.

/// Marker prefix of the load-phase throughput line in a YCSB result log
pub const LOAD_THROUGHPUT_MARKER: &str = "Load throughput";

/// Marker prefix of the run-phase throughput line in a YCSB result log
pub const RUN_THROUGHPUT_MARKER: &str = "Run throughput";

/// Workload key of the load slot in per-workload tables
pub const LOAD_WORKLOAD: &str = "load";

/// Decimal places kept in the output table
pub const OUTPUT_DECIMALS: usize = 2;

// Defaults mirror the layout of the mnemosyne experiment scripts
pub const DEFAULT_METHODS: &[&str] = &["mnemosyne-plus", "mnemosyne", "default"];
pub const DEFAULT_WORKLOADS: &[&str] = &["load", "b"];
pub const DEFAULT_SCALE_WORKLOAD: &str = "b";
pub const DEFAULT_SCALES: &[(&str, &str)] = &[
    ("scale1x", "10GB"),
    ("scale2x", "20GB"),
    ("scale3x", "30GB"),
    ("scale4x", "40GB"),
    ("scale5x", "50GB"),
];

/// Output file name of the per-workload table
pub const WORKLOAD_OUTPUT_FILE: &str = "ycsb_agg_exp.txt";

/// Header of the label column for each table kind
pub const WORKLOAD_COLUMN: &str = "workloads";
pub const SCALE_COLUMN: &str = "scales";

/// Build the per-scale output file name
///
/// `ycsb_scalability_workload<w>_dynamic_exp.txt` or `..._no_dynamic_exp.txt`
pub fn scalability_output_file(workload: &str, dynamic: bool) -> String {
    let flavor = if dynamic { "dynamic" } else { "no_dynamic" };
    format!("ycsb_scalability_workload{}_{}_exp.txt", workload, flavor)
}

/// Build a result log file name
pub fn result_file_name(method: &str, workload: &str) -> String {
    format!("{}_workload{}_ycsb_result.txt", method, workload)
}

/// Interpret the boolean-like `DYNAMIC` argument
///
/// Only `True` and `true` enable it; anything else is treated as false.
pub fn parse_dynamic_flag(value: &str) -> bool {
    matches!(value, "True" | "true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dynamic_flag() {
        assert!(parse_dynamic_flag("True"));
        assert!(parse_dynamic_flag("true"));
        assert!(!parse_dynamic_flag("TRUE"));
        assert!(!parse_dynamic_flag("False"));
        assert!(!parse_dynamic_flag("1"));
    }

    #[test]
    fn test_output_file_names() {
        assert_eq!(
            scalability_output_file("b", true),
            "ycsb_scalability_workloadb_dynamic_exp.txt"
        );
        assert_eq!(
            scalability_output_file("b", false),
            "ycsb_scalability_workloadb_no_dynamic_exp.txt"
        );
        assert_eq!(
            result_file_name("mnemosyne", "a"),
            "mnemosyne_workloada_ycsb_result.txt"
        );
    }
}
