use lingolift_protocol::{Sentence, TokenId};
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("token {0} is part of a dependency cycle")]
    Cycle(TokenId),
    #[error("token {0} is not part of the sentence")]
    UnknownToken(TokenId),
}

/// Dependency structure of one sentence. Edges run from a governor to
/// its dependents; node `i` is the token at position `i`.
pub struct DependencyTree {
    graph: DiGraph<TokenId, ()>,
}

impl DependencyTree {
    pub fn from_sentence(sentence: &Sentence) -> Result<Self, TreeError> {
        let mut graph = DiGraph::with_capacity(sentence.len(), sentence.len());
        for (id, _) in sentence.iter() {
            graph.add_node(id);
        }
        for (id, token) in sentence.iter() {
            if let Some(ancestor) = token.ancestor {
                graph.add_edge(NodeIndex::new(ancestor.index()), NodeIndex::new(id.index()), ());
            }
        }

        toposort(&graph, None).map_err(|cycle| TreeError::Cycle(graph[cycle.node_id()]))?;
        Ok(Self { graph })
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    fn node(&self, id: TokenId) -> Result<NodeIndex, TreeError> {
        if id.index() < self.graph.node_count() {
            Ok(NodeIndex::new(id.index()))
        } else {
            Err(TreeError::UnknownToken(id))
        }
    }

    fn head_of(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.graph.neighbors_directed(node, Direction::Incoming).next()
    }

    /// Every governor of `id`, nearest first, up to the root.
    pub fn ancestors(&self, id: TokenId) -> Result<Ancestors<'_>, TreeError> {
        let node = self.node(id)?;
        Ok(Ancestors {
            tree: self,
            next: self.head_of(node),
        })
    }

    /// Direct dependents of `id`, in sentence order.
    pub fn dependents(&self, id: TokenId) -> Result<Vec<TokenId>, TreeError> {
        let node = self.node(id)?;
        let mut dependents: Vec<TokenId> = self
            .graph
            .neighbors_directed(node, Direction::Outgoing)
            .map(|child| self.graph[child])
            .collect();
        dependents.sort();
        Ok(dependents)
    }

    /// Tokens without a governor, in sentence order.
    pub fn roots(&self) -> Vec<TokenId> {
        self.graph
            .node_indices()
            .filter(|&node| self.head_of(node).is_none())
            .map(|node| self.graph[node])
            .collect()
    }

    /// Number of governors above `id`; roots have depth 0.
    pub fn depth(&self, id: TokenId) -> Result<usize, TreeError> {
        Ok(self.ancestors(id)?.count())
    }
}

/// Walks from a token's immediate governor up to the root.
pub struct Ancestors<'a> {
    tree: &'a DependencyTree,
    next: Option<NodeIndex>,
}

impl Iterator for Ancestors<'_> {
    type Item = TokenId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.head_of(current);
        Some(self.tree.graph[current])
    }
}
