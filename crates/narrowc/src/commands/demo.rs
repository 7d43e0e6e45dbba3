use narrow_dispatch::DispatchConfig;

use super::CommandError;
use crate::scenarios::Scenario;

/// `narrowc list`
pub fn list_scenarios() -> Vec<String> {
    let width = Scenario::ALL
        .iter()
        .map(|s| s.name().len())
        .max()
        .unwrap_or(0);
    Scenario::ALL
        .iter()
        .map(|s| format!("  {:<width$}  {}", s.name(), s.description()))
        .collect()
}

/// `narrowc demo <name>`
pub fn run_demo(name: &str, config: &DispatchConfig) -> Result<Vec<String>, CommandError> {
    let scenario =
        Scenario::from_name(name).ok_or_else(|| CommandError::UnknownScenario(name.to_string()))?;
    run_scenario(scenario, config)
}

/// `narrowc all`: every scenario, each under a `== name ==` header.
pub fn run_all(config: &DispatchConfig) -> Result<Vec<String>, CommandError> {
    let mut lines = Vec::new();
    for (i, scenario) in Scenario::ALL.into_iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(format!("== {} ==", scenario.name()));
        lines.extend(run_scenario(scenario, config)?);
    }
    Ok(lines)
}

fn run_scenario(scenario: Scenario, config: &DispatchConfig) -> Result<Vec<String>, CommandError> {
    scenario
        .run(config)
        .map_err(|source| CommandError::Scenario {
            scenario: scenario.name(),
            source,
        })
}
