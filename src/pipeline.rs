//! End-to-end route generation for one or many regions.

use std::sync::Arc;

use tracing::info_span;

use crate::config::GenerationConfig;
use crate::cycles::CycleSet;
use crate::distance::TravelMatrix;
use crate::enumeration::RouteEnumerator;
use crate::error::Result;
use crate::graph::{Network, NodeLabels};
use crate::models::RouteSet;

/// Everything derived for one region.
#[derive(Debug, Clone)]
pub struct RegionRoutes {
    /// The network with its hub and spanning tree.
    pub network: Network,
    /// Fundamental cycles of the network.
    pub cycles: CycleSet,
    /// Candidate routes, combined first, then direct.
    pub routes: RouteSet,
}

/// Input for one region.
#[derive(Debug, Clone)]
pub struct RegionInput {
    /// Region name, used as the prefix of route names.
    pub name: String,
    /// Node names.
    pub labels: Arc<NodeLabels>,
    /// Travel costs between the region's nodes.
    pub travel: TravelMatrix,
    /// Hub index.
    pub hub: usize,
}

/// Builds the network, derives its cycles, and enumerates its routes.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_routegen::config::GenerationConfig;
/// use u_routegen::distance::TravelMatrix;
/// use u_routegen::graph::NodeLabels;
/// use u_routegen::pipeline::generate_region_routes;
///
/// let labels = Arc::new(NodeLabels::new(["Hub", "A", "B", "C"]).unwrap());
/// let tm = TravelMatrix::from_points(&[(0.0, 0.0), (3.0, 0.0), (3.0, 1.0), (4.0, 2.0)]);
/// let config = GenerationConfig::default().with_min_neighbors(2);
///
/// let region = generate_region_routes("south", labels, &tm, 0, &config).unwrap();
/// assert_eq!(region.cycles.len(), region.network.graph().cycle_rank());
/// assert!(region.routes.uncovered().is_empty());
/// ```
pub fn generate_region_routes(
    name: &str,
    labels: Arc<NodeLabels>,
    travel: &TravelMatrix,
    hub: usize,
    config: &GenerationConfig,
) -> Result<RegionRoutes> {
    let _span = info_span!("region", name).entered();
    let network = Network::build(name, labels, travel, hub, config.min_neighbors)?;
    let cycles = CycleSet::derive(network.graph(), network.tree())?;
    let routes = RouteEnumerator::new(&network, &cycles, config.limits)?.enumerate()?;
    Ok(RegionRoutes {
        network,
        cycles,
        routes,
    })
}

/// Generates routes for independent regions, one thread per region.
///
/// Results are returned in input order; a failing region does not affect
/// the others.
pub fn generate_all_regions(
    regions: &[RegionInput],
    config: &GenerationConfig,
) -> Vec<Result<RegionRoutes>> {
    std::thread::scope(|scope| {
        let handles: Vec<_> = regions
            .iter()
            .map(|region| {
                scope.spawn(move || {
                    generate_region_routes(
                        &region.name,
                        Arc::clone(&region.labels),
                        &region.travel,
                        region.hub,
                        config,
                    )
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| match h.join() {
                Ok(result) => result,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumeration::RouteLimits;
    use crate::error::RouteGenError;
    use crate::evaluation::RouteEvaluator;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_region(name: &str, n: usize, seed: u64) -> RegionInput {
        let mut rng = StdRng::seed_from_u64(seed);
        let points: Vec<(f64, f64)> = (0..n)
            .map(|_| (rng.random_range(0.0..50.0), rng.random_range(0.0..50.0)))
            .collect();
        RegionInput {
            name: name.to_string(),
            labels: Arc::new(NodeLabels::new((0..n).map(|i| format!("{name}-{i}"))).expect("unique")),
            travel: TravelMatrix::from_points(&points),
            hub: 0,
        }
    }

    fn assert_route_properties(region: &RegionRoutes, limits: RouteLimits) {
        let hub = region.network.hub();
        for route in &region.routes {
            assert!(route.edges().is_symmetric());
            assert!(route.edges().max_degree() <= limits.max_degree());
            assert!(route.stops().len() <= limits.max_stops());
            assert!(route.visits(hub));
        }
        assert!(region.routes.uncovered().is_empty());
    }

    #[test]
    fn test_four_node_scenario() {
        let labels = Arc::new(NodeLabels::new(["Hub", "A", "B", "C"]).expect("unique"));
        let travel = TravelMatrix::from_rows(&[
            vec![0.0, 4.0, 4.0, 9.0],
            vec![4.0, 0.0, 1.0, 7.0],
            vec![4.0, 1.0, 0.0, 2.0],
            vec![9.0, 7.0, 2.0, 0.0],
        ])
        .expect("valid");
        let config = GenerationConfig::default().with_min_neighbors(2);
        let region = generate_region_routes("central", labels, &travel, 0, &config).expect("valid");

        assert_eq!(region.network.tree().edge_count(), 3);
        assert_eq!(region.cycles.len(), region.network.graph().edge_count() - 3);
        assert!(region.routes.num_combined() >= 1);
        assert_route_properties(&region, config.limits);

        let direct: Vec<_> = region.routes.iter().filter(|r| r.is_direct()).collect();
        assert_eq!(direct.len(), 3);
        for (node, route) in (1..4).zip(direct) {
            assert_eq!(route.edges().get(0, node), 2);
            assert_eq!(route.edges().get(node, 0), 2);
            assert_eq!(route.edges().edge_count(), 1);
        }
    }

    #[test]
    fn test_random_regions_hold_properties() {
        let config = GenerationConfig::default().with_min_neighbors(2);
        for seed in 0..5 {
            let input = random_region("r", 7, seed);
            let region = generate_region_routes(
                &input.name,
                Arc::clone(&input.labels),
                &input.travel,
                input.hub,
                &config,
            )
            .expect("valid");
            assert_eq!(region.network.tree().edge_count(), 6);
            assert_eq!(region.cycles.len(), region.network.graph().cycle_rank());
            assert_route_properties(&region, config.limits);
        }
    }

    #[test]
    fn test_invalid_k_aborts() {
        let input = random_region("bad", 3, 1);
        let config = GenerationConfig::default().with_min_neighbors(3);
        assert!(matches!(
            generate_region_routes(&input.name, input.labels, &input.travel, 0, &config),
            Err(RouteGenError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_invalid_limits_abort() {
        let labels = Arc::new(NodeLabels::new(["Hub", "A", "B", "C"]).expect("unique"));
        let travel = TravelMatrix::from_rows(&[
            vec![0.0, 4.0, 4.0, 9.0],
            vec![4.0, 0.0, 1.0, 7.0],
            vec![4.0, 1.0, 0.0, 2.0],
            vec![9.0, 7.0, 2.0, 0.0],
        ])
        .expect("valid");
        for limits in [
            RouteLimits::default().with_direct_route_scale(0).with_max_stops(2),
            RouteLimits::default().with_direct_route_scale(3),
        ] {
            let config = GenerationConfig::default()
                .with_min_neighbors(2)
                .with_limits(limits);
            assert!(matches!(
                generate_region_routes("central", Arc::clone(&labels), &travel, 0, &config),
                Err(RouteGenError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn test_all_regions_in_order() {
        let regions = vec![
            random_region("north", 6, 11),
            random_region("east", 3, 12),
            random_region("west", 6, 13),
        ];
        let config = GenerationConfig::default().with_min_neighbors(2);
        let results = generate_all_regions(&regions, &config);
        assert_eq!(results.len(), 3);
        // k = 2 on 3 nodes is valid (k < n); every region succeeds.
        for (input, result) in regions.iter().zip(&results) {
            let region = result.as_ref().expect("valid");
            assert_eq!(region.network.name(), input.name);
            assert!(region.routes.routes()[0].name().starts_with(&input.name));
        }
    }

    #[test]
    fn test_routes_can_be_priced() {
        let input = random_region("priced", 5, 3);
        let config = GenerationConfig::default().with_min_neighbors(2);
        let region = generate_region_routes(
            &input.name,
            Arc::clone(&input.labels),
            &input.travel,
            input.hub,
            &config,
        )
        .expect("valid");
        let demands = vec![0.0, 2.0, 3.0, 4.0, 5.0];
        let eval = RouteEvaluator::new(&input.travel, &demands, &config.vehicle, input.hub)
            .expect("sized");
        let (metrics, _) = eval.evaluate_all(&region.routes).expect("sized");
        assert_eq!(metrics.len(), region.routes.len());
        assert!(metrics.iter().all(|m| m.travel_time >= 0.0 && m.cost >= 0.0));
    }
}
