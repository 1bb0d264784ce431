//! Boundary-matching MWPM decoder.
//!
//! One matching graph per stabilizer family: a node per stabilizer group
//! (detector) plus a single boundary node, with one edge from every
//! detector to the boundary carrying a fault id equal to the detector's
//! index. There are deliberately no detector-to-detector edges — the graph
//! models boundary-terminated error chains only, which is the minimum
//! structure that exercises the matching machinery. In this star topology
//! each active detector's boundary edge is its unique escape, so the
//! minimum-weight pairing (with boundary copies padding the parity) is the
//! active edge set itself.

use ndarray::ArrayView3;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use tracing::trace;

use muninn_code::{Layout, SampledSyndromes};

use crate::error::DecodeResult;
use crate::{Decoder, LogicalPredictions};

/// Node payload of the matching graph. Fault ids live on the edges, as the
/// matching machinery consumes them from the correction set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchNode {
    /// Detector for one stabilizer group.
    Detector,
    /// The shared boundary node.
    Boundary,
}

/// Matching graph for one stabilizer family.
#[derive(Debug, Clone)]
struct MatchingGraph {
    graph: UnGraph<MatchNode, usize>,
    detectors: Vec<NodeIndex>,
}

impl MatchingGraph {
    fn new(detector_count: usize) -> Self {
        let mut graph = UnGraph::new_undirected();
        let boundary = graph.add_node(MatchNode::Boundary);
        let detectors = (0..detector_count)
            .map(|fault_id| {
                let node = graph.add_node(MatchNode::Detector);
                graph.add_edge(node, boundary, fault_id);
                node
            })
            .collect();
        Self { graph, detectors }
    }

    /// Match a syndrome against the boundary and return the parity of the
    /// corrected fault ids.
    ///
    /// `active` flags the detectors whose aggregate detection event is
    /// nonzero. Indices beyond the graph's detector range are ignored, so a
    /// mismatched block degenerates to an all-zero decode instead of
    /// panicking.
    fn correction_parity(&self, active: &[bool]) -> u8 {
        let mut corrected = 0_usize;
        for (detector, &fired) in active.iter().enumerate() {
            if !fired {
                continue;
            }
            let Some(&node) = self.detectors.get(detector) else {
                continue;
            };
            // Walk the detector's unique boundary edge to its fault id.
            if let Some(edge) = self.graph.edges(node).next() {
                trace!(fault_id = *edge.weight(), "matched detector to boundary");
                corrected += 1;
            }
        }
        (corrected % 2) as u8
    }
}

/// Minimum-weight-perfect-matching decoder over boundary-augmented
/// detector graphs.
///
/// The syndrome fed to each family's graph is the per-shot XOR of that
/// detector's events across all rounds: the decoder sees the full per-shot
/// detection pattern, not individual rounds.
#[derive(Debug, Clone)]
pub struct MwpmDecoder {
    x_graph: MatchingGraph,
    z_graph: MatchingGraph,
}

impl MwpmDecoder {
    /// Build the matching graphs for an existing layout.
    pub fn from_layout(layout: &Layout) -> Self {
        Self {
            x_graph: MatchingGraph::new(layout.x_stabilizers().len()),
            z_graph: MatchingGraph::new(layout.z_stabilizers().len()),
        }
    }

    /// Build the matching graphs for a code distance.
    pub fn from_distance(distance: usize) -> DecodeResult<Self> {
        Ok(Self::from_layout(&Layout::build(distance)?))
    }

    /// Aggregate one shot's events into per-detector parities.
    fn aggregate(detection: &ArrayView3<'_, u8>, shot: usize) -> Vec<bool> {
        let rounds = detection.shape()[1];
        let detectors = detection.shape()[2];
        (0..detectors)
            .map(|detector| {
                let mut parity = 0_u8;
                for round in 0..rounds {
                    parity ^= detection[[shot, round, detector]] & 1;
                }
                parity == 1
            })
            .collect()
    }
}

impl Decoder for MwpmDecoder {
    fn name(&self) -> &'static str {
        "mwpm"
    }

    fn decode(&self, syndromes: &SampledSyndromes) -> LogicalPredictions {
        let shots = syndromes.shots();
        let mut predictions = LogicalPredictions::zeros(shots);

        for shot in 0..shots {
            // Z-type violations witness X-type error chains and vice versa.
            let active_z = Self::aggregate(&syndromes.z_detection.view(), shot);
            predictions.x_logical[shot] = self.z_graph.correction_parity(&active_z);

            let active_x = Self::aggregate(&syndromes.x_detection.view(), shot);
            predictions.z_logical[shot] = self.x_graph.correction_parity(&active_x);
        }

        predictions
    }
}
