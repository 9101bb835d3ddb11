use itertools::Itertools;
use netgraphs::{algo::*, gens::*, io::*, prelude::*, repr::digest::GraphDigest, utils::*};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

fn data_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|line| !line.starts_with('#')).collect()
}

#[test]
fn undirected_round_trip() {
    let sparse = SparseGraphUndir::<()>::try_read_edge_list("1 2\n2 3\n1 3\n4 5\n".as_bytes()).unwrap();
    assert_eq!(sparse.number_of_nodes(), 5);

    let lcc = sparse.lcc();
    assert_eq!(lcc.number_of_nodes(), 3);
    assert_eq!(lcc.number_of_edges(), 3);

    let mut buffer = Vec::new();
    lcc.try_write_edge_list(&mut buffer).unwrap();
    let text = String::from_utf8(buffer).unwrap();

    let lines = data_lines(&text);
    assert_eq!(lines, vec!["1\t2", "1\t3", "2\t3"]);
    for line in lines {
        let (a, b) = line
            .split('\t')
            .map(|t| t.parse::<Node>().unwrap())
            .collect_tuple()
            .unwrap();
        assert!(a < b);
    }

    let dense = SimpleGraphUndir::from_largest_component(sparse);
    assert_eq!(dense.number_of_nodes(), 3);
    assert_eq!(dense.number_of_edges(), 3);
    assert!(dense.is_connected());
}

#[test]
fn directed_scenario() {
    let sparse = SparseGraph::<()>::try_read_edge_list("1 2\n2 1\n2 3\n3 4\n".as_bytes()).unwrap();

    let sccs = StronglyConnectedComponents::new(&sparse);
    assert_eq!(sccs.number_of_components(), 3);
    assert_eq!(sparse.largest_strongly_connected_component(), vec![1, 2]);

    let lscc = sparse.lscc();
    assert_eq!(lscc.number_of_nodes(), 2);
    assert_eq!(lscc.edge_list().collect_vec(), vec![Edge(1, 2), Edge(2, 1)]);

    let (dense, mapper) = SimpleGraph::from_largest_scc_with_mapping(sparse);
    assert_eq!(dense.ordered_edges(false), vec![Edge(0, 1), Edge(1, 0)]);
    assert_eq!(mapper.old_id_of(0), Some(1));
    assert_eq!(mapper.old_id_of(1), Some(2));
    assert!(dense.is_strongly_connected());
}

#[test]
fn weight_generator_scenario() {
    let graph: WeightedSparseGraphUndir = EdgeListReader::new()
        .try_read_graph_with("1 2\n".as_bytes(), constant_weight(7))
        .unwrap();

    assert_eq!(graph.number_of_edges(), 1);
    assert_eq!(graph.weighted_edges().collect_vec(), vec![(Edge(1, 2), 7)]);

    let mut buffer = Vec::new();
    graph.try_write_edge_list(&mut buffer).unwrap();
    assert_eq!(data_lines(&String::from_utf8(buffer).unwrap()), vec!["1\t2\t7"]);
}

#[test]
fn signed_pipeline() {
    let input = "% signed network\n10 20 1\n20 30 -1\n30 10 -1\n40 50 1\n";
    let signed = SignedGraphUndir::try_read_edge_list(input.as_bytes()).unwrap();
    assert_eq!(signed.number_of_nodes(), 3);
    assert_eq!(signed.number_of_positive_edges(), 1);

    let mut buffer = Vec::new();
    signed.try_write_edge_list(&mut buffer).unwrap();
    assert_eq!(
        data_lines(&String::from_utf8(buffer).unwrap()),
        vec!["0\t1\t+1", "0\t2\t-1", "1\t2\t-1"]
    );

    // balanced triangle: the expansion falls apart into the two copies
    let expanded = SimpleGraphUndir::from(signed);
    assert_eq!(expanded.number_of_nodes(), 6);
    assert_eq!(expanded.number_of_edges(), 6);
    assert!(!expanded.is_connected());
}

#[test]
fn compaction_is_stable_across_runs() {
    let rng = &mut Pcg64Mcg::seed_from_u64(99);
    let text = (0..500)
        .map(|_| format!("{} {}", rng.random_range(0..300) * 7, rng.random_range(0..300) * 7))
        .join("\n");

    let digests = (0..3)
        .map(|_| {
            let sparse = SparseGraph::<()>::try_read_edge_list(text.as_bytes()).unwrap();
            SimpleGraph::from_largest_scc(sparse).digest_sha256()
        })
        .collect_vec();
    assert!(digests.iter().all_equal());

    let sparse = SparseGraph::<()>::try_read_edge_list(text.as_bytes()).unwrap();
    let expected = sparse.lscc();
    let (dense, mapper) = SimpleGraph::from_largest_scc_with_mapping(sparse);
    assert_eq!(dense.number_of_nodes(), expected.number_of_nodes());
    assert_eq!(dense.number_of_edges(), expected.number_of_edges());
    assert!(dense.is_strongly_connected());
    for e in expected.edge_list() {
        let e = mapper.new_edge_of(e).unwrap();
        assert!(dense.has_edge(e.0, e.1));
    }
}

#[test]
fn generated_graphs_survive_reduction() {
    let graph = Apollonian::new().generations(3).generate();

    let mut buffer = Vec::new();
    graph.try_write_edge_list(&mut buffer).unwrap();
    let read = SimpleGraphUndir::try_read_edge_list(buffer.as_slice()).unwrap();

    assert_eq!(read.number_of_nodes(), graph.number_of_nodes());
    assert_eq!(read.digest_sha256(), graph.digest_sha256());
}
