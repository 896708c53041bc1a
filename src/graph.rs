//! src/graph.rs
//!
//! Representeert een simpele, ongerichte graaf. Elke knoop heeft een
//! burenlijst (voor het doorlopen van buren in de constructieve fase, de
//! purge en de DFS) en een 'BitVec'-rij van de adjacency matrix voor
//! O(1) `has_edge`. De kern muteert de graaf nooit na het opbouwen.

use crate::error::{Result, SolverError};
use bitvec::prelude::*;
use log::warn;

/// Een ongerichte, simpele graaf over de knopen `0..n`.
#[derive(Clone, Debug)]
pub struct Graph {
    /// Burenlijsten in volgorde van toevoegen.
    neighbors: Vec<Vec<usize>>,
    /// Adjacency matrix; `adj[i][j]` is 1 als er een kant (i,j) bestaat, met j != i.
    adj: Vec<BitVec>,
    edges: usize,
}

impl Graph {
    /*────────── Constructors ──────────*/

    /// Creëert een lege graaf met `n` geïsoleerde knopen.
    pub fn with_vertices(n: usize) -> Self {
        Self {
            neighbors: vec![Vec::new(); n],
            adj: (0..n).map(|_| bitvec![0; n]).collect(),
            edges: 0,
        }
    }

    /// Bouwt een graaf op basis van een expliciete lijst van kanten (0-gebaseerde indices).
    ///
    /// Zelf-lussen en dubbele kanten worden genegeerd (met een waarschuwing),
    /// eindpunten buiten `0..n` leveren een fout op.
    pub fn from_edge_list(n: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut g = Self::with_vertices(n);
        let mut loops = 0usize;
        let mut repeated = 0usize;

        for &(u, v) in edges {
            if let Some(&vertex) = [u, v].iter().find(|&&x| x >= n) {
                return Err(SolverError::VertexOutOfRange { vertex, n });
            }
            if u == v {
                loops += 1;
            } else if !g.add_edge(u, v) {
                repeated += 1;
            }
        }

        if loops > 0 {
            warn!("{loops} zelf-lus(sen) genegeerd bij het opbouwen van de graaf");
        }
        if repeated > 0 {
            warn!("{repeated} dubbele kant(en) genegeerd bij het opbouwen van de graaf");
        }
        Ok(g)
    }

    /*────────── Getters ──────────*/

    /// Geeft het aantal knopen (vertices) in de graaf terug.
    #[inline]
    pub fn n(&self) -> usize {
        self.neighbors.len()
    }

    /// Geeft het aantal kanten (edges) in de graaf terug (elke kant eenmaal geteld).
    #[inline]
    pub fn m(&self) -> usize {
        self.edges
    }

    /// Geeft de graad (degree) van knoop `v` terug.
    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.neighbors[v].len()
    }

    /// Geeft de buren van knoop `v` terug.
    #[inline]
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.neighbors[v]
    }

    #[inline]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adj[u][v]
    }

    /// Controleert met een BFS over alle knopen of de graaf samenhangend is.
    /// Een lege graaf geldt niet als samenhangend.
    pub fn is_connected(&self) -> bool {
        let n = self.n();
        if n == 0 {
            return false;
        }
        let mut seen = bitvec![0; n];
        let mut queue = std::collections::VecDeque::with_capacity(n);
        seen.set(0, true);
        queue.push_back(0);
        let mut reached = 1usize;

        while let Some(u) = queue.pop_front() {
            for &w in self.neighbors(u) {
                if !seen[w] {
                    seen.set(w, true);
                    reached += 1;
                    queue.push_back(w);
                }
            }
        }
        reached == n
    }

    /*────────── Mutators ──────────*/

    /// Voegt een ongerichte kant toe tussen knopen `u` en `v`.
    /// Geeft `false` terug als de kant al bestond.
    pub fn add_edge(&mut self, u: usize, v: usize) -> bool {
        assert!(u < self.n() && v < self.n() && u != v, "Knoopindex buiten bereik of zelf-lus");
        if self.adj[u][v] {
            return false;
        }
        self.adj[u].set(v, true);
        self.adj[v].set(u, true);
        self.neighbors[u].push(v);
        self.neighbors[v].push(u);
        self.edges += 1;
        true
    }
}
