//! Dependency view of a circuit, used for depth metrics.
//!
//! Each operation is linked to the previous operation on every wire it
//! touches. Depth and two-qubit depth are longest paths through that graph.

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex as PetNodeIndex};
use petgraph::visit::EdgeRef;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::circuit::Circuit;
use crate::instruction::Instruction;
use crate::qubit::{ClbitId, QubitId};

pub type NodeIndex = PetNodeIndex<u32>;

/// A quantum or classical wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WireId {
    Qubit(QubitId),
    Clbit(ClbitId),
}

/// Edge payload: the wire that carries the dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DagEdge {
    pub wire: WireId,
}

/// Operations as nodes, wire dependencies as edges.
///
/// Node indices follow program order, which is a topological order.
#[derive(Debug, Clone)]
pub struct CircuitDag {
    graph: DiGraph<Instruction, DagEdge, u32>,
}

impl CircuitDag {
    pub fn from_circuit(circuit: &Circuit) -> Self {
        let mut graph = DiGraph::with_capacity(circuit.len(), circuit.len() * 2);
        // Last node seen on each wire.
        let mut last: FxHashMap<WireId, NodeIndex> = FxHashMap::default();

        for inst in circuit.ops() {
            let node = graph.add_node(inst.clone());
            let qubit_wires = inst.qubits.iter().copied().map(WireId::Qubit);
            let clbit_wires = inst.clbits.iter().copied().map(WireId::Clbit);
            for wire in qubit_wires.chain(clbit_wires) {
                if let Some(prev) = last.insert(wire, node) {
                    graph.add_edge(prev, node, DagEdge { wire });
                }
            }
        }

        Self { graph }
    }

    pub fn num_ops(&self) -> usize {
        self.graph.node_count()
    }

    /// Operations in program order.
    pub fn topological_ops(&self) -> impl Iterator<Item = (NodeIndex, &Instruction)> {
        self.graph
            .node_indices()
            .map(move |idx| (idx, &self.graph[idx]))
    }

    /// Layers of non-barrier operations.
    pub fn depth(&self) -> usize {
        self.depth_by(|inst| !inst.is_barrier())
    }

    /// Longest dependency chain, counting only operations `counted` accepts.
    ///
    /// Uncounted operations still order their neighbours.
    pub fn depth_by(&self, counted: impl Fn(&Instruction) -> bool) -> usize {
        let mut layer = vec![0usize; self.graph.node_count()];
        for node in self.graph.node_indices() {
            let after = self
                .graph
                .edges_directed(node, Direction::Incoming)
                .map(|e| layer[e.source().index()])
                .max()
                .unwrap_or(0);
            layer[node.index()] = after + usize::from(counted(&self.graph[node]));
        }
        layer.into_iter().max().unwrap_or(0)
    }

    pub fn graph(&self) -> &DiGraph<Instruction, DagEdge, u32> {
        &self.graph
    }
}
