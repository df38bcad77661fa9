pub mod scenario;

pub use scenario::{
    Scenario, ScenarioFile, ScenarioRun, check_scenario, load_scenarios, run_scenario,
    transcript_line,
};
