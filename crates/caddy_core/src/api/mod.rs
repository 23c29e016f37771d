pub mod json_api;

#[cfg(test)]
mod json_api_test;

pub use json_api::{
    bag_json, hole_strategy_json, hole_strategy_json_with_config, random_scenario_json,
    recommend_json, recommend_json_with_config, BagRequest, BagResponse, HoleStrategyRequest,
    HoleStrategyResponse, RecommendRequest, RecommendResponse, ScenarioRequest, ScenarioResponse,
    SCHEMA_VERSION,
};
