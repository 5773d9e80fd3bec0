//! Unit tests for tc-router.
//!
//! Catalogue fixtures are hand-crafted; the monotonicity check uses a seeded
//! `SmallRng` so failures are reproducible.

#[cfg(test)]
mod helpers {
    use tc_catalogue::{Catalogue, RouteKind};
    use tc_core::{GeoPoint, RoutingSettings};

    /// 60 km/h = 1000 m/min, so 1000 m of road costs exactly one minute.
    pub fn settings() -> RoutingSettings {
        RoutingSettings::new(2, 60.0).unwrap()
    }

    /// A(0,0) ── B(0,1) ── C(0,2), distances A→B 1000, B→C 1000,
    /// C→A 2000, loop R1 = [A, B, C, A].
    pub fn abc() -> Catalogue {
        let mut c = Catalogue::new();
        c.add_stop("A", GeoPoint::new(0.0, 0.0));
        c.add_stop("B", GeoPoint::new(0.0, 1.0));
        c.add_stop("C", GeoPoint::new(0.0, 2.0));
        c.add_distance("A", "B", 1000).unwrap();
        c.add_distance("B", "C", 1000).unwrap();
        c.add_distance("C", "A", 2000).unwrap();
        c.add_route("R1", &["A", "B", "C", "A"], RouteKind::Loop, None).unwrap();
        c
    }

    /// Five stops S0..S4 in a line, 1000 m apart in one direction only.
    pub fn line() -> Catalogue {
        let mut c = Catalogue::new();
        for i in 0..5 {
            c.add_stop(format!("S{i}"), GeoPoint::new(0.0, i as f64 * 0.01));
        }
        for i in 0..4 {
            c.add_distance(&format!("S{i}"), &format!("S{}", i + 1), 1000).unwrap();
        }
        c
    }
}

// ── TransitGraph & CSR ────────────────────────────────────────────────────────

#[cfg(test)]
mod graph {
    use tc_core::{EdgeId, VertexId};

    use crate::{RouterError, TransitGraph, TransitGraphBuilder};

    fn diamond() -> TransitGraph {
        // 0 → 1 → 3, 0 → 2 → 3, edges added out of vertex order.
        let mut b = TransitGraphBuilder::new(4);
        b.add_edge(VertexId(1), VertexId(3), 1.0);
        b.add_edge(VertexId(0), VertexId(1), 1.0);
        b.add_edge(VertexId(2), VertexId(3), 5.0);
        b.add_edge(VertexId(0), VertexId(2), 1.0);
        b.build()
    }

    #[test]
    fn empty_build() {
        let g = TransitGraphBuilder::new(0).build();
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn edge_ids_are_insertion_order() {
        let g = diamond();
        assert_eq!(g.edge(EdgeId(0)).unwrap().from, VertexId(1));
        assert_eq!(g.edge(EdgeId(3)).unwrap().to, VertexId(2));
        assert!(matches!(g.edge(EdgeId(4)), Err(RouterError::EdgeNotFound(_))));
    }

    #[test]
    fn csr_groups_by_source_in_id_order() {
        let g = diamond();
        assert_eq!(g.out_edges(VertexId(0)), &[EdgeId(1), EdgeId(3)]);
        assert_eq!(g.out_edges(VertexId(1)), &[EdgeId(0)]);
        assert_eq!(g.out_degree(VertexId(3)), 0);
        assert_eq!(g.vertex_out_start.len(), g.vertex_count() + 1);
    }

    #[test]
    fn from_incidence_restores_identical_graph() {
        let g = diamond();
        let lists: Vec<Vec<EdgeId>> = g.incidence_lists().map(|l| l.to_vec()).collect();
        let restored = TransitGraph::from_incidence(g.edges.clone(), lists).unwrap();
        assert_eq!(restored, g);
    }

    #[test]
    fn from_incidence_rejects_misplaced_edge() {
        let g = diamond();
        let mut lists: Vec<Vec<EdgeId>> = g.incidence_lists().map(|l| l.to_vec()).collect();
        let moved = lists[0].pop().unwrap();
        lists[2].push(moved);
        assert!(matches!(
            TransitGraph::from_incidence(g.edges.clone(), lists),
            Err(RouterError::Inconsistent(_))
        ));
    }

    #[test]
    fn from_incidence_rejects_missing_and_duplicate_edges() {
        let g = diamond();
        let mut lists: Vec<Vec<EdgeId>> = g.incidence_lists().map(|l| l.to_vec()).collect();
        lists[1].clear();
        assert!(TransitGraph::from_incidence(g.edges.clone(), lists.clone()).is_err());

        lists[1] = vec![EdgeId(0), EdgeId(0)];
        assert!(TransitGraph::from_incidence(g.edges.clone(), lists).is_err());
    }

    #[test]
    fn from_incidence_rejects_out_of_range_vertex() {
        let g = diamond();
        let lists: Vec<Vec<EdgeId>> = g.incidence_lists().take(3).map(|l| l.to_vec()).collect();
        assert!(TransitGraph::from_incidence(g.edges.clone(), lists).is_err());
    }
}

// ── Dijkstra ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dijkstra {
    use tc_core::{EdgeId, VertexId};

    use crate::{DijkstraRouter, Router, RouterError, TransitGraphBuilder};

    #[test]
    fn picks_cheaper_branch() {
        let mut b = TransitGraphBuilder::new(4);
        b.add_edge(VertexId(0), VertexId(1), 1.0); // e0
        b.add_edge(VertexId(1), VertexId(3), 1.0); // e1
        b.add_edge(VertexId(0), VertexId(2), 1.0); // e2
        b.add_edge(VertexId(2), VertexId(3), 5.0); // e3
        let g = b.build();

        let path = DijkstraRouter.route(&g, VertexId(0), VertexId(3)).unwrap();
        assert_eq!(path.edges, vec![EdgeId(0), EdgeId(1)]);
        assert_eq!(path.total_weight, 2.0);
    }

    #[test]
    fn same_vertex_is_trivial() {
        let g = TransitGraphBuilder::new(2).build();
        let path = DijkstraRouter.route(&g, VertexId(1), VertexId(1)).unwrap();
        assert!(path.is_trivial());
        assert_eq!(path.total_weight, 0.0);
    }

    #[test]
    fn unreachable_is_no_route() {
        let mut b = TransitGraphBuilder::new(3);
        b.add_edge(VertexId(1), VertexId(0), 1.0);
        let g = b.build();
        assert!(matches!(
            DijkstraRouter.route(&g, VertexId(0), VertexId(2)),
            Err(RouterError::NoRoute { .. })
        ));
    }

    #[test]
    fn out_of_range_vertex() {
        let g = TransitGraphBuilder::new(2).build();
        assert!(matches!(
            DijkstraRouter.route(&g, VertexId(0), VertexId(9)),
            Err(RouterError::VertexNotFound(VertexId(9)))
        ));
    }

    #[test]
    fn zero_weight_edges() {
        let mut b = TransitGraphBuilder::new(3);
        b.add_edge(VertexId(0), VertexId(1), 0.0);
        b.add_edge(VertexId(1), VertexId(0), 0.0);
        b.add_edge(VertexId(1), VertexId(2), 0.0);
        let g = b.build();
        let path = DijkstraRouter.route(&g, VertexId(0), VertexId(2)).unwrap();
        assert_eq!(path.edges, vec![EdgeId(0), EdgeId(2)]);
        assert_eq!(path.total_weight, 0.0);
    }
}

// ── Graph builder ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use tc_catalogue::RouteKind;
    use tc_core::{EdgeId, RoutingSettings, VertexId};

    use crate::{
        EdgeInfo, GraphBuilder, RouterError, RouterResult, RoutingGraph, TransitGraph,
    };

    fn ride_spans(g: &RoutingGraph) -> Vec<u32> {
        g.edge_infos()
            .iter()
            .filter_map(|i| match i {
                EdgeInfo::Ride { span_count, .. } => Some(*span_count),
                EdgeInfo::Wait { .. } => None,
            })
            .collect()
    }

    #[test]
    fn vertex_pairs_and_wait_edges() {
        let c = super::helpers::abc();
        let g = GraphBuilder::new(&c, super::helpers::settings()).build();
        assert_eq!(g.graph().vertex_count(), 6);

        let b = c.stop_id("B").unwrap();
        assert_eq!(g.wait_vertex(b), VertexId(2));

        let (edge, info) = g.edge_detail(EdgeId(1)).unwrap();
        assert_eq!(*info, EdgeInfo::Wait { stop: b });
        assert_eq!((edge.from, edge.to), (VertexId(2), VertexId(3)));
        assert_eq!(edge.weight, 2.0);
    }

    #[test]
    fn loop_emits_transitive_closure() {
        let c = super::helpers::abc();
        let g = GraphBuilder::new(&c, super::helpers::settings()).build();
        // 3 waits + C(4,2) = 6 rides.
        assert_eq!(g.graph().edge_count(), 9);
        let mut spans = ride_spans(&g);
        spans.sort_unstable();
        assert_eq!(spans, vec![1, 1, 1, 2, 2, 3]);
    }

    #[test]
    fn ride_weight_is_cumulative_distance() {
        let c = super::helpers::abc();
        let g = GraphBuilder::new(&c, super::helpers::settings()).build();
        let a = c.stop_id("A").unwrap();
        // Full loop back to A: 1000 + 1000 + 2000 m = 4 minutes.
        let full = g
            .edge_infos()
            .iter()
            .position(|i| matches!(i, EdgeInfo::Ride { span_count: 3, .. }))
            .unwrap();
        let (edge, _) = g.edge_detail(EdgeId(full as u32)).unwrap();
        assert_eq!(edge.to, g.wait_vertex(a));
        assert!((edge.weight - 4.0).abs() < 1e-9);
    }

    #[test]
    fn out_and_back_splits_at_midpoint() {
        let mut c = super::helpers::line();
        c.add_route(
            "M",
            &["S0", "S1", "S2", "S1", "S0"],
            RouteKind::OutAndBack,
            Some("S2"),
        )
        .unwrap();
        let g = GraphBuilder::new(&c, super::helpers::settings()).build();
        // Two 3-stop halves, 3 rides each; nothing spans the turnaround.
        let spans = ride_spans(&g);
        assert_eq!(spans.len(), 6);
        assert!(spans.iter().all(|&s| s <= 2));
    }

    #[test]
    fn single_stop_route_has_no_rides() {
        let mut c = super::helpers::line();
        c.add_route("Idle", &["S3"], RouteKind::Loop, None).unwrap();
        let g = GraphBuilder::new(&c, super::helpers::settings()).build();
        assert!(ride_spans(&g).is_empty());
        assert_eq!(g.graph().edge_count(), 5);
    }

    #[test]
    fn from_parts_rejects_short_metadata() {
        let c = super::helpers::abc();
        let g = GraphBuilder::new(&c, super::helpers::settings()).build();
        let mut info = g.edge_infos().to_vec();
        info.pop();
        assert!(RoutingGraph::from_parts(
            g.settings(),
            g.graph().clone(),
            g.stop_vertices().to_vec(),
            info,
        )
        .is_err());
    }

    #[test]
    fn capacity_estimate_is_exact() {
        let mut c = super::helpers::abc();
        c.add_route("M", &["A", "B", "C", "B", "A"], RouteKind::OutAndBack, Some("C"))
            .unwrap();
        let g = GraphBuilder::new(&c, super::helpers::settings()).build();
        assert_eq!(crate::builder::edge_estimate(&c), g.graph().edge_count());
    }

    fn parts(g: &RoutingGraph) -> (TransitGraph, Vec<VertexId>, Vec<EdgeInfo>) {
        (g.graph().clone(), g.stop_vertices().to_vec(), g.edge_infos().to_vec())
    }

    fn first_ride(g: &RoutingGraph) -> usize {
        g.edge_infos()
            .iter()
            .position(|i| matches!(i, EdgeInfo::Ride { .. }))
            .unwrap()
    }

    fn is_inconsistent<T>(r: RouterResult<T>) -> bool {
        matches!(r, Err(RouterError::Inconsistent(_)))
    }

    #[test]
    fn from_parts_accepts_built_graph() {
        let c = super::helpers::abc();
        let g = GraphBuilder::new(&c, super::helpers::settings()).build();
        let (graph, stops, info) = parts(&g);
        let again = RoutingGraph::from_parts(g.settings(), graph, stops, info).unwrap();
        assert_eq!(again.graph(), g.graph());
    }

    #[test]
    fn from_parts_rejects_bad_weights() {
        let c = super::helpers::abc();
        let g = GraphBuilder::new(&c, super::helpers::settings()).build();
        let ride = first_ride(&g);
        for bad in [-100.0, f64::NAN, f64::INFINITY] {
            let (mut graph, stops, info) = parts(&g);
            graph.edges[ride].weight = bad;
            assert!(is_inconsistent(RoutingGraph::from_parts(g.settings(), graph, stops, info)));
        }
    }

    #[test]
    fn from_parts_rejects_permuted_stop_vertices() {
        let c = super::helpers::abc();
        let g = GraphBuilder::new(&c, super::helpers::settings()).build();
        let (graph, mut stops, info) = parts(&g);
        stops.swap(0, 2);
        assert!(is_inconsistent(RoutingGraph::from_parts(g.settings(), graph, stops, info)));
    }

    #[test]
    fn from_parts_rejects_shared_or_exit_stop_vertex() {
        let c = super::helpers::abc();
        let g = GraphBuilder::new(&c, super::helpers::settings()).build();

        let (graph, mut stops, info) = parts(&g);
        stops[1] = stops[0];
        assert!(is_inconsistent(RoutingGraph::from_parts(g.settings(), graph, stops, info)));

        let (graph, mut stops, info) = parts(&g);
        stops[0] = VertexId(1);
        assert!(is_inconsistent(RoutingGraph::from_parts(g.settings(), graph, stops, info)));
    }

    #[test]
    fn from_parts_rejects_wait_tagged_with_other_stop() {
        let c = super::helpers::abc();
        let g = GraphBuilder::new(&c, super::helpers::settings()).build();
        let (graph, stops, mut info) = parts(&g);
        info[0] = EdgeInfo::Wait { stop: c.stop_id("B").unwrap() };
        assert!(is_inconsistent(RoutingGraph::from_parts(g.settings(), graph, stops, info)));
    }

    #[test]
    fn from_parts_rejects_ride_between_wrong_vertices() {
        let c = super::helpers::abc();
        let g = GraphBuilder::new(&c, super::helpers::settings()).build();
        let ride = first_ride(&g);
        // Land on A's wait-exit instead of a wait-entry.
        let (mut graph, stops, info) = parts(&g);
        graph.edges[ride].to = VertexId(1);
        assert!(is_inconsistent(RoutingGraph::from_parts(g.settings(), graph, stops, info)));
    }

    #[test]
    fn from_parts_rejects_wait_weight_other_than_settings() {
        let c = super::helpers::abc();
        let g = GraphBuilder::new(&c, super::helpers::settings()).build();
        let (graph, stops, info) = parts(&g);
        let slower = RoutingSettings::new(5, 60.0).unwrap();
        assert!(is_inconsistent(RoutingGraph::from_parts(slower, graph, stops, info)));
    }

    #[test]
    fn build_is_deterministic() {
        let c = super::helpers::abc();
        let a = GraphBuilder::new(&c, super::helpers::settings()).build();
        let b = GraphBuilder::new(&c, super::helpers::settings()).build();
        assert_eq!(a.graph(), b.graph());
        assert_eq!(a.edge_infos(), b.edge_infos());
    }
}

// ── End-to-end routing over built graphs ──────────────────────────────────────

#[cfg(test)]
mod itineraries {
    use tc_catalogue::RouteKind;

    use crate::{DijkstraRouter, EdgeInfo, GraphBuilder, Router};

    #[test]
    fn abc_scenario_wait_then_single_ride() {
        let c = super::helpers::abc();
        let g = GraphBuilder::new(&c, super::helpers::settings()).build();
        let a = c.stop_id("A").unwrap();
        let cc = c.stop_id("C").unwrap();
        let r1 = c.route_id("R1").unwrap();

        let path = DijkstraRouter
            .route(g.graph(), g.wait_vertex(a), g.wait_vertex(cc))
            .unwrap();
        let legs: Vec<EdgeInfo> = path
            .edges
            .iter()
            .map(|&e| *g.edge_detail(e).unwrap().1)
            .collect();
        assert_eq!(
            legs,
            vec![EdgeInfo::Wait { stop: a }, EdgeInfo::Ride { route: r1, span_count: 2 }]
        );
        // wait 2 + 2000 m at 1000 m/min.
        assert!((path.total_weight - 4.0).abs() < 1e-9);
    }

    #[test]
    fn return_leg_uses_inbound_half() {
        let mut c = super::helpers::line();
        c.add_route(
            "M",
            &["S0", "S1", "S2", "S1", "S0"],
            RouteKind::OutAndBack,
            Some("S2"),
        )
        .unwrap();
        let g = GraphBuilder::new(&c, super::helpers::settings()).build();
        let s1 = c.stop_id("S1").unwrap();
        let s0 = c.stop_id("S0").unwrap();

        // S1 → S0 is one inbound hop (reverse fallback distance 1000 m),
        // not a trip out to the turnaround and back.
        let path = DijkstraRouter
            .route(g.graph(), g.wait_vertex(s1), g.wait_vertex(s0))
            .unwrap();
        assert_eq!(path.edges.len(), 2);
        assert!((path.total_weight - 3.0).abs() < 1e-9);
    }

    #[test]
    fn crossing_the_turnaround_reboards_there() {
        // A non-palindromic out-and-back: halves [S0,S1,S2] and [S2,S3,S4].
        let mut c = super::helpers::line();
        c.add_route(
            "X",
            &["S0", "S1", "S2", "S3", "S4"],
            RouteKind::OutAndBack,
            Some("S4"),
        )
        .unwrap();
        let g = GraphBuilder::new(&c, super::helpers::settings()).build();
        let s0 = c.stop_id("S0").unwrap();
        let s2 = c.stop_id("S2").unwrap();
        let s4 = c.stop_id("S4").unwrap();

        let path = DijkstraRouter
            .route(g.graph(), g.wait_vertex(s0), g.wait_vertex(s4))
            .unwrap();
        let waits: Vec<_> = path
            .edges
            .iter()
            .filter_map(|&e| match *g.edge_detail(e).unwrap().1 {
                EdgeInfo::Wait { stop } => Some(stop),
                EdgeInfo::Ride { .. } => None,
            })
            .collect();
        assert_eq!(waits, vec![s0, s2]);
        // Two waits + 4000 m of riding.
        assert!((path.total_weight - 8.0).abs() < 1e-9);
    }

    #[test]
    fn transfer_between_routes() {
        let mut c = super::helpers::line();
        c.add_route("L", &["S0", "S1", "S2"], RouteKind::Loop, None).unwrap();
        c.add_route("R", &["S2", "S3"], RouteKind::Loop, None).unwrap();
        let g = GraphBuilder::new(&c, super::helpers::settings()).build();
        let s0 = c.stop_id("S0").unwrap();
        let s3 = c.stop_id("S3").unwrap();

        let path = DijkstraRouter
            .route(g.graph(), g.wait_vertex(s0), g.wait_vertex(s3))
            .unwrap();
        assert_eq!(path.edges.len(), 4);
        assert!((path.total_weight - (2.0 + 2.0 + 2.0 + 1.0)).abs() < 1e-9);
    }

    #[test]
    fn disconnected_stops_have_no_route() {
        let c = super::helpers::line();
        let g = GraphBuilder::new(&c, super::helpers::settings()).build();
        let s0 = c.stop_id("S0").unwrap();
        let s4 = c.stop_id("S4").unwrap();
        assert!(DijkstraRouter
            .route(g.graph(), g.wait_vertex(s0), g.wait_vertex(s4))
            .is_err());
    }
}

// ── Randomised properties ─────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use tc_core::VertexId;

    use crate::{DijkstraRouter, Router, TransitGraph, TransitGraphBuilder};

    const VERTICES: u32 = 12;

    fn random_edges(rng: &mut SmallRng, count: usize) -> Vec<(u32, u32, f64)> {
        (0..count)
            .map(|_| {
                (
                    rng.gen_range(0..VERTICES),
                    rng.gen_range(0..VERTICES),
                    rng.gen_range(0.0..10.0),
                )
            })
            .collect()
    }

    fn build(edges: &[(u32, u32, f64)]) -> TransitGraph {
        let mut b = TransitGraphBuilder::new(VERTICES as usize);
        for &(from, to, w) in edges {
            b.add_edge(VertexId(from), VertexId(to), w);
        }
        b.build()
    }

    fn cost(g: &TransitGraph, from: u32, to: u32) -> f64 {
        DijkstraRouter
            .route(g, VertexId(from), VertexId(to))
            .map(|p| p.total_weight)
            .unwrap_or(f64::INFINITY)
    }

    #[test]
    fn adding_an_edge_never_increases_cost() {
        for seed in 0..20u64 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut edges = random_edges(&mut rng, 24);
            let before = build(&edges);
            edges.extend(random_edges(&mut rng, 1));
            let after = build(&edges);

            for from in 0..VERTICES {
                for to in 0..VERTICES {
                    let (b, a) = (cost(&before, from, to), cost(&after, from, to));
                    assert!(a <= b + 1e-9, "seed {seed}: {from}->{to} went {b} -> {a}");
                }
            }
        }
    }

    #[test]
    fn path_weight_matches_edge_sum() {
        let mut rng = SmallRng::seed_from_u64(7);
        let g = build(&random_edges(&mut rng, 40));
        for from in 0..VERTICES {
            for to in 0..VERTICES {
                if let Ok(p) = DijkstraRouter.route(&g, VertexId(from), VertexId(to)) {
                    let sum: f64 = p.edges.iter().map(|e| g.edges[e.index()].weight).sum();
                    assert!((sum - p.total_weight).abs() < 1e-9);
                }
            }
        }
    }
}
