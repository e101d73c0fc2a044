//! Fragment dependency ordering.
//!
//! Fragments are ordered so that every fragment comes after all fragments it
//! spreads. Strongly connected components are found with Tarjan's algorithm,
//! which yields them leaves first; any component with more than one member
//! (or a fragment spreading itself) is a cycle.

use indexmap::{IndexMap, IndexSet};

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::document::FragmentDefinition;
use crate::{Error, PassResult};

/// Sort `fragments` dependencies first.
///
/// Identical duplicates collapse into one definition with a warning;
/// duplicates that differ are an error. Spreads of fragments not in the
/// list do not constrain the order.
pub fn order(fragments: &[FragmentDefinition]) -> PassResult<Vec<FragmentDefinition>> {
    let mut diagnostics = Diagnostics::new();
    let mut definitions: IndexMap<&str, &FragmentDefinition> = IndexMap::new();
    for fragment in fragments {
        match definitions.get(fragment.name.as_str()) {
            None => {
                definitions.insert(&fragment.name, fragment);
            }
            Some(existing) if existing.same_definition(fragment) => {
                diagnostics
                    .report(DiagnosticKind::DuplicateFragment)
                    .subject(&fragment.name)
                    .message(&fragment.name)
                    .emit();
            }
            Some(_) => return Err(Error::ConflictingFragment(fragment.name.clone())),
        }
    }

    let sccs = SccFinder::find(&definitions);
    let mut ordered = Vec::with_capacity(definitions.len());
    for scc in sccs {
        let is_cycle = match scc.as_slice() {
            [single] => definitions
                .get(single)
                .is_some_and(|f| f.spreads().contains(single)),
            _ => true,
        };
        if is_cycle {
            let mut names: Vec<String> = scc.iter().rev().map(|s| s.to_string()).collect();
            if let Some(first) = names.first().cloned() {
                names.push(first);
            }
            return Err(Error::FragmentCycle(names));
        }
        if let Some(fragment) = scc.first().and_then(|name| definitions.get(name)) {
            ordered.push((*fragment).clone());
        }
    }

    tracing::debug!(fragments = ordered.len(), "fragments ordered");
    Ok((ordered, diagnostics))
}

struct SccFinder<'a> {
    definitions: &'a IndexMap<&'a str, &'a FragmentDefinition>,
    index: usize,
    stack: Vec<&'a str>,
    on_stack: IndexSet<&'a str>,
    indices: IndexMap<&'a str, usize>,
    lowlinks: IndexMap<&'a str, usize>,
    sccs: Vec<Vec<&'a str>>,
}

impl<'a> SccFinder<'a> {
    fn find(definitions: &'a IndexMap<&'a str, &'a FragmentDefinition>) -> Vec<Vec<&'a str>> {
        let mut finder = Self {
            definitions,
            index: 0,
            stack: Vec::new(),
            on_stack: IndexSet::new(),
            indices: IndexMap::new(),
            lowlinks: IndexMap::new(),
            sccs: Vec::new(),
        };

        for &name in definitions.keys() {
            if !finder.indices.contains_key(name) {
                finder.strongconnect(name);
            }
        }

        finder.sccs
    }

    fn strongconnect(&mut self, name: &'a str) {
        self.indices.insert(name, self.index);
        self.lowlinks.insert(name, self.index);
        self.index += 1;
        self.stack.push(name);
        self.on_stack.insert(name);

        if let Some(fragment) = self.definitions.get(name) {
            for target in fragment.spreads() {
                // Only spreads of known fragments are edges.
                let Some((&target, _)) = self.definitions.get_key_value(target) else {
                    continue;
                };
                if !self.indices.contains_key(target) {
                    self.strongconnect(target);
                    let target_low = self.lowlinks[target];
                    self.lower(name, target_low);
                } else if self.on_stack.contains(target) {
                    let target_index = self.indices[target];
                    self.lower(name, target_index);
                }
            }
        }

        if self.lowlinks[name] == self.indices[name] {
            let mut scc = Vec::new();
            while let Some(w) = self.stack.pop() {
                self.on_stack.swap_remove(w);
                scc.push(w);
                if w == name {
                    break;
                }
            }
            self.sccs.push(scc);
        }
    }

    fn lower(&mut self, name: &str, value: usize) {
        if let Some(low) = self.lowlinks.get_mut(name) {
            *low = (*low).min(value);
        }
    }
}
