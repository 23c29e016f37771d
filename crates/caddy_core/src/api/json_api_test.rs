#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::engine::config::EngineConfig;
    use serde_json::{json, Value};

    fn recommend(request: Value) -> Result<Value, String> {
        let out = recommend_json_with_config(&request.to_string(), &EngineConfig::default())?;
        Ok(serde_json::from_str(&out).unwrap())
    }

    fn hole(request: Value) -> Result<Value, String> {
        let out = hole_strategy_json_with_config(&request.to_string(), &EngineConfig::default())?;
        Ok(serde_json::from_str(&out).unwrap())
    }

    #[test]
    fn test_recommend_neutral_conditions() {
        let out = recommend(json!({
            "schema_version": 1,
            "raw_yards": 150.0,
            "seed": 7,
            "n_sim": 200
        }))
        .unwrap();

        assert_eq!(out["plays_like"]["plays_like"].as_f64(), Some(150.0));
        assert_eq!(out["target_yards"].as_f64(), Some(150.0));

        let recs = out["recommendations"].as_array().unwrap();
        assert!(!recs.is_empty() && recs.len() <= 5);
        let sg: Vec<f64> = recs.iter().map(|r| r["strokes_gained"].as_f64().unwrap()).collect();
        assert!(sg.windows(2).all(|w| w[0] >= w[1]));
        assert!(recs[0]["club"].is_string());
        assert!(recs[0]["rationale"].as_str().unwrap().to_lowercase().contains("strokes-gained"));
        assert!(out["optimal_carry"].as_f64().is_some());
    }

    #[test]
    fn test_recommend_is_reproducible_with_seed() {
        let request = json!({
            "schema_version": 1,
            "raw_yards": 132.0,
            "seed": 99,
            "situation": {"trouble": {"long": "Severe"}, "strategy": "Conservative"}
        })
        .to_string();
        let config = EngineConfig::default();
        let a = recommend_json_with_config(&request, &config).unwrap();
        let b = recommend_json_with_config(&request, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_tournament_mode_returns_raw_yardage_only() {
        let out = recommend(json!({
            "schema_version": 1,
            "raw_yards": 163.0,
            "tournament_mode": true,
            "situation": {"wind_direction": "Into", "wind_strength": "Heavy"}
        }))
        .unwrap();

        assert_eq!(out["tournament_mode"], json!(true));
        assert_eq!(out["target_yards"].as_f64(), Some(163.0));
        assert!(out.get("plays_like").is_none());
        assert!(out["recommendations"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_loose_labels_fall_back() {
        let out = recommend(json!({
            "schema_version": 1,
            "raw_yards": 150.0,
            "seed": 1,
            "n_sim": 50,
            "situation": {
                "wind_direction": "into",
                "wind_strength": "Medium",
                "lie": "somewhere odd",
                "elevation": "SLIGHT_UPHILL"
            }
        }))
        .unwrap();

        let breakdown = &out["plays_like"];
        assert!((breakdown["after_wind"].as_f64().unwrap() - 159.0).abs() < 1e-9);
        assert!((breakdown["after_elevation"].as_f64().unwrap() - 164.0).abs() < 1e-9);
        assert_eq!(breakdown["after_lie"], breakdown["after_elevation"]);
    }

    #[test]
    fn test_center_of_green_target() {
        let out = recommend(json!({
            "schema_version": 1,
            "raw_yards": 150.0,
            "use_center_of_green": true,
            "tournament_mode": true,
            "situation": {"green": {"front_yards": 140.0, "back_yards": 166.0}}
        }))
        .unwrap();
        assert_eq!(out["raw_target"].as_f64(), Some(153.0));
    }

    #[test]
    fn test_request_errors() {
        let err = recommend(json!({"schema_version": 2, "raw_yards": 150.0})).unwrap_err();
        assert!(err.starts_with("Unsupported schema version"), "{err}");

        let err = recommend_json_with_config("{not json", &EngineConfig::default()).unwrap_err();
        assert!(err.starts_with("Invalid JSON request"), "{err}");

        let err = recommend(json!({"schema_version": 1, "raw_yards": 150.0, "n_sim": 0})).unwrap_err();
        assert!(err.contains("n_sim"), "{err}");

        let err = recommend(json!({"schema_version": 1, "raw_yards": 150.0, "driver_speed_mph": -5.0}))
            .unwrap_err();
        assert!(err.contains("reference speed"), "{err}");
    }

    #[test]
    fn test_bag_json_with_calibration() {
        let out = bag_json(
            &json!({
                "schema_version": 1,
                "driver_speed_mph": 100.0,
                "green_firmness": "Firm",
                "calibration": {"7i": 155.0}
            })
            .to_string(),
        )
        .unwrap();
        let out: Value = serde_json::from_str(&out).unwrap();

        let rows = out["bag"]["full_bag"].as_array().unwrap();
        assert_eq!(rows.len(), 13);
        let seven = rows.iter().find(|r| r["club"] == "7i").unwrap();
        assert_eq!(seven["carry"].as_f64(), Some(155.0));
        assert!(seven["total"].as_f64().unwrap() > 155.0);
        assert_eq!(out["bag"]["candidates"].as_array().unwrap().len(), 31);
    }

    #[test]
    fn test_hole_strategy_by_par() {
        let par4 = hole(json!({"schema_version": 1, "par": 4, "hole_yards": 410.0})).unwrap();
        assert_eq!(par4["par4"]["options"].as_array().unwrap().len(), 6);
        assert!(par4.get("par3").is_none() && par4.get("par5").is_none());

        let par5 = hole(json!({
            "schema_version": 1,
            "par": 5,
            "hole_yards": 560.0,
            "context": {"fairway_width": "Narrow", "tee_left_trouble": "Mild"}
        }))
        .unwrap();
        assert!(par5["par5"]["approach"].is_string());

        let par3 = hole(json!({"schema_version": 1, "par": 3, "hole_yards": 155.0, "seed": 4})).unwrap();
        assert!(par3["par3"]["best"]["p_on_green"].as_f64().is_some());

        let err = hole(json!({"schema_version": 1, "par": 6, "hole_yards": 600.0})).unwrap_err();
        assert!(err.starts_with("Unsupported par"), "{err}");
    }

    #[test]
    fn test_random_scenario_json() {
        let request = json!({"schema_version": 1, "seed": 5}).to_string();
        let a = random_scenario_json(&request).unwrap();
        let b = random_scenario_json(&request).unwrap();
        assert_eq!(a, b);

        let out: Value = serde_json::from_str(&a).unwrap();
        let plays_like = out["plays_like"].as_f64().unwrap();
        assert!((40.0..=260.0).contains(&plays_like));
        assert!(out["scenario"]["wind_dir"].is_string());
    }
}
