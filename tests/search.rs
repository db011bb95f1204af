use rand::{rngs::StdRng, Rng, SeedableRng};
use selection_paths::{
    build_graph,
    graphs::{Distance, EdgeList, Graph, WeightedEdge, UNREACHABLE},
    search::shortest_paths,
    GraphLayout,
};

fn random_edge_list(rng: &mut StdRng, number_of_vertices: u32, number_of_edges: usize) -> EdgeList {
    let edges = (0..number_of_edges)
        .map(|_| {
            WeightedEdge::new(
                rng.gen_range(0..number_of_vertices),
                rng.gen_range(0..number_of_vertices),
                rng.gen_range(0..100),
            )
        })
        .collect();

    EdgeList {
        number_of_vertices,
        edges,
    }
}

/// Bellman-Ford over the adjacency the graph actually stores.
fn bellman_ford(graph: &dyn Graph, source: u32) -> Vec<Distance> {
    let mut distances = vec![UNREACHABLE; graph.number_of_vertices() as usize];
    distances[source as usize] = 0;

    for _ in 0..graph.number_of_vertices() {
        let mut changed = false;
        for tail in 0..graph.number_of_vertices() {
            if distances[tail as usize] == UNREACHABLE {
                continue;
            }
            for edge in graph.edges(tail) {
                let alternative = distances[tail as usize] + edge.weight() as Distance;
                if alternative < distances[edge.head() as usize] {
                    distances[edge.head() as usize] = alternative;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }

    distances
}

#[test]
fn matches_bellman_ford_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..200 {
        let number_of_vertices = rng.gen_range(1..30);
        let number_of_edges = rng.gen_range(0..80);
        let edge_list = random_edge_list(&mut rng, number_of_vertices, number_of_edges);
        let directed = rng.gen_bool(0.5);

        for layout in [GraphLayout::VecVec, GraphLayout::AdjacencyVec] {
            let graph = build_graph(&edge_list, directed, layout).unwrap();
            let source = rng.gen_range(0..number_of_vertices);

            let distances = shortest_paths(graph.as_ref(), source).unwrap();
            assert_eq!(distances.distances(), bellman_ford(graph.as_ref(), source));
        }
    }
}

#[test]
fn no_edge_can_be_relaxed_after_search() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..100 {
        let number_of_vertices = rng.gen_range(1..40);
        let edge_list = random_edge_list(&mut rng, number_of_vertices, 60);
        let graph = build_graph(&edge_list, true, GraphLayout::VecVec).unwrap();

        let distances = shortest_paths(graph.as_ref(), 0).unwrap();
        assert_eq!(distances.get(0), Some(0));

        for tail in 0..graph.number_of_vertices() {
            let Some(distance_tail) = distances.get(tail) else {
                continue;
            };
            for edge in graph.edges(tail) {
                let distance_head = distances
                    .get(edge.head())
                    .expect("head of a reachable tail is reachable");
                assert!(distance_head <= distance_tail + edge.weight() as Distance);
            }
        }
    }
}

#[test]
fn sparse_graphs_terminate_with_unreachable_vertices() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100 {
        // far fewer edges than vertices, most vertices have no path
        let edge_list = random_edge_list(&mut rng, 50, 10);
        let graph = build_graph(&edge_list, true, GraphLayout::AdjacencyVec).unwrap();
        let source = rng.gen_range(0..50);

        let distances = shortest_paths(graph.as_ref(), source).unwrap();
        let expected = bellman_ford(graph.as_ref(), source);
        assert_eq!(distances.distances(), expected);
        assert!(distances.number_of_reachable() <= 11);
    }
}
