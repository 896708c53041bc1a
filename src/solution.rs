//! src/solution.rs
//!
//! Representeert een (gedeeltelijke) oplossing: een verzameling gelabelde
//! knopen (regeneratoren) met een gecachte kost `|S|`. De kost wordt alleen
//! incrementeel bijgehouden door `label`/`unlabel`, nooit herberekend.
//! Haalbaarheid (samenhang + dominantie) hoeft alleen op vaste
//! controlepunten te gelden; `validate` controleert dat vanaf nul.

use crate::components::connected_components;
use crate::graph::Graph;
use bitvec::prelude::*;

/// Een veranderlijke labeling, gebonden aan een specifieke `Graph`.
///
/// `clone()` kopieert de bitset diep; een kloon deelt nooit de labels van zijn bron.
#[derive(Clone, Debug)]
pub struct Solution<'g> {
    graph: &'g Graph,
    labeled: BitVec,
    cost: usize,
}

impl<'g> Solution<'g> {
    /*────────── Constructors ──────────*/

    /// Creëert een nieuwe oplossing zonder gelabelde knopen.
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            labeled: bitvec![0; graph.n()],
            cost: 0,
        }
    }

    /// Creëert een oplossing waarin precies `vertices` gelabeld zijn.
    pub fn from_vertices(graph: &'g Graph, vertices: &[usize]) -> Self {
        let mut sol = Self::new(graph);
        for &v in vertices {
            sol.label(v);
        }
        sol
    }

    /*────────── Queries ──────────*/

    /// Het aantal gelabelde knopen.
    #[inline]
    pub fn cost(&self) -> usize {
        self.cost
    }

    #[inline]
    pub fn is_labeled(&self, v: usize) -> bool {
        self.labeled[v]
    }

    /// Geeft een referentie naar de onderliggende graaf.
    #[inline]
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Onveranderlijke bitset van de gelabelde knopen.
    #[inline]
    pub fn bitset(&self) -> &BitSlice {
        &self.labeled
    }

    /// De gelabelde knopen in oplopende volgorde.
    pub fn labeled_vertices(&self) -> Vec<usize> {
        self.labeled.iter_ones().collect()
    }

    /// Controleert vanaf nul of de oplossing haalbaar is: de kost klopt met de
    /// bitset, de gelabelde knopen vormen precies één component en elke knoop is
    /// gelabeld of grenst aan een gelabelde knoop.
    ///
    /// Duur (O(V + E)); alleen bedoeld voor asserties en tests.
    pub fn validate(&self) -> bool {
        let coherent_cost = self.labeled.count_ones() == self.cost;
        let single_component = connected_components(self).len() == 1;

        let mut covered = bitvec![0; self.graph.n()];
        for r in self.labeled.iter_ones() {
            covered.set(r, true);
            for &adj in self.graph.neighbors(r) {
                covered.set(adj, true);
            }
        }
        let all_covered = covered.all();

        coherent_cost && single_component && all_covered
    }

    /*────────── Mutators ──────────*/

    /// Labelt knoop `v`. Panikeert als `v` al gelabeld is.
    pub fn label(&mut self, v: usize) {
        assert!(!self.labeled[v], "knoop {v} is al gelabeld");
        self.labeled.set(v, true);
        self.cost += 1;
    }

    /// Verwijdert het label van knoop `v`. Panikeert als `v` niet gelabeld is.
    pub fn unlabel(&mut self, v: usize) {
        assert!(self.labeled[v], "knoop {v} is niet gelabeld");
        self.labeled.set(v, false);
        self.cost -= 1;
    }

    /// Overschrijft de volledige toestand met die van `other`.
    /// Beide oplossingen moeten over dezelfde graaf gaan.
    pub fn copy_from(&mut self, other: &Solution<'g>) {
        assert!(
            std::ptr::eq(self.graph, other.graph),
            "oplossingen horen bij verschillende grafen"
        );
        self.labeled.copy_from_bitslice(&other.labeled);
        self.cost = other.cost;
    }
}
