//! Minimal SMILES perception for additive lipophilicity estimation.
//!
//! Supports the organic subset (B, C, N, O, P, S, F, Cl, Br, I), aromatic
//! lowercase atoms, branches, ring-closure digits (including `%nn`),
//! bracket atoms with explicit hydrogen counts and charges, and explicit
//! bond orders. Anything outside that subset is a scan failure — the
//! caller treats a failed scan as a missing value, never as an error
//! (ARCHITECTURE.md §3.2).

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    B,
    C,
    N,
    O,
    P,
    S,
    F,
    Cl,
    Br,
    I,
}

impl Element {
    /// Default valence used to derive implicit hydrogens.
    fn valence(&self) -> f64 {
        match self {
            Element::B => 3.0,
            Element::C => 4.0,
            Element::N => 3.0,
            Element::O => 2.0,
            Element::P => 3.0,
            Element::S => 2.0,
            Element::F | Element::Cl | Element::Br | Element::I => 1.0,
        }
    }
}

/// One perceived atom with its accumulated bond order.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub element: Element,
    pub aromatic: bool,
    /// Explicit hydrogen count from a bracket atom; `None` means implicit.
    pub explicit_h: Option<u32>,
    bond_order_sum: f64,
}

impl Atom {
    /// Hydrogen count: explicit for bracket atoms, valence-derived
    /// otherwise. An aromatic atom donates one bond to the ring π system.
    pub fn hydrogens(&self) -> f64 {
        if let Some(h) = self.explicit_h {
            return h as f64;
        }
        let aromatic_penalty = if self.aromatic { 1.0 } else { 0.0 };
        (self.element.valence() - aromatic_penalty - self.bond_order_sum).max(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    UnexpectedChar(char),
    UnknownElement(String),
    DanglingBond,
    UnclosedRing,
    UnclosedBranch,
    UnbalancedBracket,
    Empty,
}

/// Scan a SMILES string into perceived atoms.
pub fn scan(smiles: &str) -> Result<Vec<Atom>, ScanError> {
    let chars: Vec<char> = smiles.trim().chars().collect();
    if chars.is_empty() {
        return Err(ScanError::Empty);
    }

    let mut atoms: Vec<Atom> = Vec::new();
    let mut prev: Option<usize> = None;
    let mut branch_stack: Vec<Option<usize>> = Vec::new();
    let mut rings: HashMap<u32, usize> = HashMap::new();
    let mut pending_bond = 1.0;
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        match ch {
            '(' => {
                branch_stack.push(prev);
                i += 1;
            }
            ')' => {
                prev = branch_stack.pop().ok_or(ScanError::UnclosedBranch)?;
                i += 1;
            }
            '-' | '/' | '\\' | ':' => {
                pending_bond = 1.0;
                i += 1;
            }
            '=' => {
                pending_bond = 2.0;
                i += 1;
            }
            '#' => {
                pending_bond = 3.0;
                i += 1;
            }
            '.' => {
                prev = None;
                pending_bond = 1.0;
                i += 1;
            }
            '0'..='9' => {
                let ring = ch as u32 - '0' as u32;
                close_or_open_ring(&mut atoms, &mut rings, ring, prev, pending_bond)?;
                pending_bond = 1.0;
                i += 1;
            }
            '%' => {
                let d1 = chars.get(i + 1).and_then(|c| c.to_digit(10));
                let d2 = chars.get(i + 2).and_then(|c| c.to_digit(10));
                let (Some(d1), Some(d2)) = (d1, d2) else {
                    return Err(ScanError::UnexpectedChar('%'));
                };
                close_or_open_ring(&mut atoms, &mut rings, d1 * 10 + d2, prev, pending_bond)?;
                pending_bond = 1.0;
                i += 3;
            }
            '[' => {
                let close = chars[i..]
                    .iter()
                    .position(|c| *c == ']')
                    .ok_or(ScanError::UnbalancedBracket)?;
                let atom = parse_bracket(&chars[i + 1..i + close])?;
                attach(&mut atoms, &mut prev, atom, pending_bond);
                pending_bond = 1.0;
                i += close + 1;
            }
            _ => {
                let (atom, consumed) = parse_plain_atom(&chars[i..])?;
                attach(&mut atoms, &mut prev, atom, pending_bond);
                pending_bond = 1.0;
                i += consumed;
            }
        }
    }

    if !rings.is_empty() {
        return Err(ScanError::UnclosedRing);
    }
    if !branch_stack.is_empty() {
        return Err(ScanError::UnclosedBranch);
    }
    Ok(atoms)
}

fn attach(atoms: &mut Vec<Atom>, prev: &mut Option<usize>, atom: Atom, bond: f64) {
    atoms.push(atom);
    let idx = atoms.len() - 1;
    if let Some(p) = *prev {
        atoms[p].bond_order_sum += bond;
        atoms[idx].bond_order_sum += bond;
    }
    *prev = Some(idx);
}

fn close_or_open_ring(
    atoms: &mut [Atom],
    rings: &mut HashMap<u32, usize>,
    ring: u32,
    prev: Option<usize>,
    bond: f64,
) -> Result<(), ScanError> {
    let current = prev.ok_or(ScanError::DanglingBond)?;
    match rings.remove(&ring) {
        Some(open) => {
            atoms[open].bond_order_sum += bond;
            atoms[current].bond_order_sum += bond;
        }
        None => {
            rings.insert(ring, current);
        }
    }
    Ok(())
}

/// Parse an unbracketed atom; returns the atom and characters consumed.
fn parse_plain_atom(rest: &[char]) -> Result<(Atom, usize), ScanError> {
    let c0 = rest[0];
    // two-letter halogens first
    if c0 == 'C' && rest.get(1) == Some(&'l') {
        return Ok((plain(Element::Cl, false), 2));
    }
    if c0 == 'B' && rest.get(1) == Some(&'r') {
        return Ok((plain(Element::Br, false), 2));
    }
    let element = match c0 {
        'B' => Element::B,
        'C' => Element::C,
        'N' => Element::N,
        'O' => Element::O,
        'P' => Element::P,
        'S' => Element::S,
        'F' => Element::F,
        'I' => Element::I,
        'b' => Element::B,
        'c' => Element::C,
        'n' => Element::N,
        'o' => Element::O,
        'p' => Element::P,
        's' => Element::S,
        other => return Err(ScanError::UnexpectedChar(other)),
    };
    Ok((plain(element, c0.is_ascii_lowercase()), 1))
}

fn plain(element: Element, aromatic: bool) -> Atom {
    Atom {
        element,
        aromatic,
        explicit_h: None,
        bond_order_sum: 0.0,
    }
}

/// Parse the interior of a bracket atom, e.g. `nH`, `NH3+`, `13C`, `O-`.
fn parse_bracket(inner: &[char]) -> Result<Atom, ScanError> {
    let mut i = 0;

    // optional isotope digits
    while i < inner.len() && inner[i].is_ascii_digit() {
        i += 1;
    }
    if i >= inner.len() {
        return Err(ScanError::UnknownElement(inner.iter().collect()));
    }

    let c0 = inner[i];
    let c1 = inner.get(i + 1).copied();
    let (element, aromatic, consumed) = match (c0, c1) {
        ('C', Some('l')) => (Element::Cl, false, 2),
        ('B', Some('r')) => (Element::Br, false, 2),
        ('B', _) => (Element::B, false, 1),
        ('C', _) => (Element::C, false, 1),
        ('N', _) => (Element::N, false, 1),
        ('O', _) => (Element::O, false, 1),
        ('P', _) => (Element::P, false, 1),
        ('S', _) => (Element::S, false, 1),
        ('F', _) => (Element::F, false, 1),
        ('I', _) => (Element::I, false, 1),
        ('b', _) => (Element::B, true, 1),
        ('c', _) => (Element::C, true, 1),
        ('n', _) => (Element::N, true, 1),
        ('o', _) => (Element::O, true, 1),
        ('p', _) => (Element::P, true, 1),
        ('s', _) => (Element::S, true, 1),
        _ => return Err(ScanError::UnknownElement(inner.iter().collect())),
    };
    i += consumed;

    // optional chirality markers
    while i < inner.len() && inner[i] == '@' {
        i += 1;
    }

    // optional explicit hydrogen count
    let mut explicit_h = 0u32;
    if i < inner.len() && inner[i] == 'H' {
        i += 1;
        explicit_h = 1;
        let mut digits = String::new();
        while i < inner.len() && inner[i].is_ascii_digit() {
            digits.push(inner[i]);
            i += 1;
        }
        if !digits.is_empty() {
            explicit_h = digits.parse().unwrap_or(1);
        }
    }

    // optional charge; magnitude is irrelevant to the contribution model
    while i < inner.len() {
        match inner[i] {
            '+' | '-' => i += 1,
            d if d.is_ascii_digit() => i += 1,
            other => return Err(ScanError::UnexpectedChar(other)),
        }
    }

    Ok(Atom {
        element,
        aromatic,
        explicit_h: Some(explicit_h),
        bond_order_sum: 0.0,
    })
}

// ── Additive contribution model ─────────────────────────────────────────────

/// Crippen-style atomic logP contribution.
fn contribution(element: Element, aromatic: bool) -> f64 {
    use Element::*;
    match (element, aromatic) {
        (C, false) => 0.1441,
        (C, true) => 0.1581,
        (N, false) => -0.6000,
        (N, true) => -0.3396,
        (O, false) => -0.2893,
        (O, true) => 0.1552,
        (S, false) => 0.6482,
        (S, true) => 0.6237,
        (P, _) => 0.8612,
        (F, _) => 0.4202,
        (Cl, _) => 0.6895,
        (Br, _) => 0.8456,
        (I, _) => 0.8857,
        (B, _) => -0.3187,
    }
}

const HYDROGEN_CONTRIBUTION: f64 = 0.1230;

/// Additive logP over perceived atoms plus hydrogens.
/// `None` on any scan failure.
pub fn crippen_logp(smiles: &str) -> Option<f64> {
    let atoms = scan(smiles).ok()?;
    if atoms.is_empty() {
        return None;
    }
    let heavy: f64 = atoms
        .iter()
        .map(|a| contribution(a.element, a.aromatic))
        .sum();
    let hydrogens: f64 = atoms.iter().map(Atom::hydrogens).sum();
    Some(heavy + hydrogens * HYDROGEN_CONTRIBUTION)
}
