//! Catalog file to map artifact, the way the binary wires it together

use std::io::Write;

use optiroute::render;
use optiroute_catalog::RouteCatalog;
use optiroute_genetics::{EvolutionEngine, GaConfig};

const ROUTES_CSV: &str = "\
route_id,distance_km,avg_speed_kmh,traffic_volume,weather_impact,start_lat,start_lon,end_lat,end_lon
R1,2.0,10.0,5.0,1.0,40.9061,29.1847,40.9357,29.1551
R2,2.0,4.0,4.0,1.0,40.9061,29.1847,40.9402,29.1204
R3,5.5,60.0,2.0,0.8,40.9061,29.1847,40.9518,29.1022
R4,3.2,25.0,1.5,1.0,40.9061,29.1847,40.9288,29.1433
";

#[test]
fn test_csv_to_geojson_pipeline() {
    let dir = tempfile::tempdir().unwrap();

    let catalog_path = dir.path().join("routes.csv");
    let mut file = std::fs::File::create(&catalog_path).unwrap();
    file.write_all(ROUTES_CSV.as_bytes()).unwrap();

    let catalog = RouteCatalog::from_csv_path(&catalog_path).unwrap();
    let config = GaConfig {
        population_size: 4,
        generations: 10,
        mutation_rate: 0.3,
    };
    let best = EvolutionEngine::new(config, 42).unwrap().run(&catalog).unwrap();
    let record = catalog.get(&best.route_id).unwrap();

    let map_path = dir.path().join("best_route.geojson");
    render::write_route_map(record, best.score, &map_path).unwrap();

    let raw = std::fs::read_to_string(&map_path).unwrap();
    let collection: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(collection["type"], "FeatureCollection");
    let features = collection["features"].as_array().unwrap();
    assert_eq!(features.len(), 3);
    for feature in features {
        assert_eq!(
            feature["properties"]["route_id"],
            best.route_id.as_str()
        );
    }
}
