// src/circuits/mod.rs

//! Ordered sequences of gates.
//!
//! The move encoder produces a [`Circuit`] per move; a round keeps the
//! concatenation of all of them so the full gate history can be printed
//! before the register is measured.

use crate::core::QubitId;
use crate::operations::Gate;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// An ordered list of gates plus the set of qubits they touch.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Circuit {
    /// Every qubit referenced by at least one gate.
    qubits: BTreeSet<QubitId>,
    /// Gates in application order.
    gates: Vec<Gate>,
}

impl Circuit {
    /// Creates a new, empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a gate and records the qubits it involves.
    pub fn add_gate(&mut self, gate: Gate) {
        for q in gate.involved_qubits() {
            self.qubits.insert(q);
        }
        self.gates.push(gate);
    }

    /// Appends gates from an iterator.
    pub fn add_gates<I>(&mut self, gates: I)
    where
        I: IntoIterator<Item = Gate>,
    {
        for gate in gates {
            self.add_gate(gate);
        }
    }

    /// Appends all gates of another circuit, keeping their order.
    pub fn extend_from(&mut self, other: &Circuit) {
        self.add_gates(other.gates.iter().copied());
    }

    /// Qubits touched by the circuit, in ascending order.
    pub fn qubits(&self) -> &BTreeSet<QubitId> {
        &self.qubits
    }

    /// Gates in application order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Highest qubit index referenced, if any.
    pub fn max_qubit(&self) -> Option<QubitId> {
        self.qubits.iter().next_back().copied()
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

impl IntoIterator for Circuit {
    type Item = Gate;
    type IntoIter = std::vec::IntoIter<Gate>;

    fn into_iter(self) -> Self::IntoIter {
        self.gates.into_iter()
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// Method-chaining helper for building a [`Circuit`].
#[derive(Default)]
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single gate.
    pub fn add_gate(mut self, gate: Gate) -> Self {
        self.circuit.add_gate(gate);
        self
    }

    /// Adds a Hadamard on `target`.
    pub fn h(self, target: usize) -> Self {
        self.add_gate(Gate::h(target))
    }

    /// Adds a Pauli-X on `target`.
    pub fn x(self, target: usize) -> Self {
        self.add_gate(Gate::x(target))
    }

    /// Adds a controlled-X.
    pub fn cx(self, control: usize, target: usize) -> Self {
        self.add_gate(Gate::cx(control, target))
    }

    /// Finalizes the construction process and returns the built `Circuit`.
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.gates.is_empty() {
            return writeln!(f, "qttt::Circuit[0 gates on 0 qubits]");
        }

        let gates = &self.gates;
        let num_gates = gates.len();

        let sorted_qubits: Vec<QubitId> = self.qubits.iter().copied().collect();
        let num_qubits = sorted_qubits.len();
        let qubit_to_row: HashMap<QubitId, usize> =
            sorted_qubits.iter().enumerate().map(|(i, q)| (*q, i)).collect();

        let max_label_width = sorted_qubits.iter().map(|q| q.to_string().len()).max().unwrap_or(0);
        let label_padding = " ".repeat(max_label_width + 2);

        const GATE_WIDTH: usize = 5;
        const WIRE: &str = "─────";
        const V_WIRE: char = '│';
        const H_WIRE: char = '─';

        // op_grid[row][time] is the wire segment, v_connect[row][time] the connector below it
        let mut op_grid: Vec<Vec<String>> = vec![vec![WIRE.to_string(); num_gates]; num_qubits];
        let mut v_connect: Vec<Vec<char>> = vec![vec![' '; num_gates]; num_qubits];

        fn format_gate(symbol: &str) -> String {
            let slen = symbol.chars().count();
            let total_dashes = GATE_WIDTH.saturating_sub(slen);
            let pre_dashes = total_dashes / 2;
            let post_dashes = total_dashes - pre_dashes;
            format!(
                "{}{}{}",
                H_WIRE.to_string().repeat(pre_dashes),
                symbol,
                H_WIRE.to_string().repeat(post_dashes)
            )
        }

        for (t, gate) in gates.iter().enumerate() {
            match gate {
                Gate::Hadamard { target } | Gate::PauliX { target } => {
                    if let Some(r) = qubit_to_row.get(target) {
                        op_grid[*r][t] = format_gate(gate.symbol());
                    }
                }
                Gate::ControlledX { control, target } => {
                    if let (Some(r_ctrl), Some(r_tgt)) = (qubit_to_row.get(control), qubit_to_row.get(target)) {
                        op_grid[*r_ctrl][t] = format_gate("@");
                        op_grid[*r_tgt][t] = format_gate(gate.symbol());

                        let r_min = (*r_ctrl).min(*r_tgt);
                        let r_max = (*r_ctrl).max(*r_tgt);
                        for row_vec in v_connect.iter_mut().take(r_max).skip(r_min) {
                            row_vec[t] = V_WIRE;
                        }
                    }
                }
            }
        }

        writeln!(f, "qttt::Circuit[{} gates on {} qubits]", num_gates, num_qubits)?;
        for r in 0..num_qubits {
            let label = format!("{}: ", sorted_qubits[r]);
            write!(f, "{:<width$}", label, width = max_label_width + 2)?;
            writeln!(f, "{}", op_grid[r].join(""))?;

            if r < num_qubits - 1 {
                write!(f, "{}", label_padding)?;
                for t in 0..num_gates {
                    let connector = v_connect[r][t];
                    let padding_needed = GATE_WIDTH - 1;
                    let pre_pad = padding_needed / 2;
                    let post_pad = padding_needed - pre_pad;
                    write!(f, "{}{}{}", " ".repeat(pre_pad), connector, " ".repeat(post_pad))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
