//! Tarjan's strongly-connected-components algorithm over the declaration
//! dependency graph (spec §4.2 step 1, §3.4).
//!
//! Edges run `decl -> the decls it reads`. Tarjan completes (pops) a
//! component only after every component reachable from it has already been
//! completed, so the natural completion order already satisfies the
//! ordering invariant spec §8.1 requires: for every edge `(a in i) -> (b in
//! j)`, `j <= i` — producers (dependencies) are emitted at or before the
//! index of their consumers.

use rustc_hash::FxHashMap;

use crate::ids::DeclId;

struct TarjanState {
    index: Vec<Option<u32>>,
    lowlink: Vec<u32>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
    next_index: u32,
    components: Vec<Vec<DeclId>>,
}

/// `deps[i]` is the set of node indices (0-based, parallel to `deps`) that
/// declaration `i` reads.
pub fn strongly_connected_components(deps: &[Vec<usize>]) -> Vec<Vec<DeclId>> {
    let n = deps.len();
    let mut state = TarjanState {
        index: vec![None; n],
        lowlink: vec![0; n],
        on_stack: vec![false; n],
        stack: Vec::new(),
        next_index: 0,
        components: Vec::new(),
    };

    for start in 0..n {
        if state.index[start].is_none() {
            strong_connect(start, deps, &mut state);
        }
    }

    state.components
}

fn strong_connect(start: usize, deps: &[Vec<usize>], state: &mut TarjanState) {
    // Explicit call-stack of (node, next-child-position) pairs, standing in
    // for recursion so pathological dependency chains can't blow the stack.
    let mut call_stack: Vec<(usize, usize)> = Vec::new();

    state.index[start] = Some(state.next_index);
    state.lowlink[start] = state.next_index;
    state.next_index += 1;
    state.stack.push(start);
    state.on_stack[start] = true;
    call_stack.push((start, 0));

    while let Some(&(v, pos)) = call_stack.last() {
        if pos < deps[v].len() {
            let w = deps[v][pos];
            call_stack.last_mut().unwrap().1 += 1;
            if state.index[w].is_none() {
                state.index[w] = Some(state.next_index);
                state.lowlink[w] = state.next_index;
                state.next_index += 1;
                state.stack.push(w);
                state.on_stack[w] = true;
                call_stack.push((w, 0));
            } else if state.on_stack[w] {
                state.lowlink[v] = state.lowlink[v].min(state.index[w].unwrap());
            }
        } else {
            call_stack.pop();
            if let Some(&(parent, _)) = call_stack.last() {
                state.lowlink[parent] = state.lowlink[parent].min(state.lowlink[v]);
            }
            if state.lowlink[v] == state.index[v].unwrap() {
                let mut component = Vec::new();
                loop {
                    let w = state.stack.pop().expect("tarjan stack underflow");
                    state.on_stack[w] = false;
                    component.push(DeclId(w as u32));
                    if w == v {
                        break;
                    }
                }
                state.components.push(component);
            }
        }
    }
}

/// Maps each `DeclId` to the index of the component containing it.
pub fn component_index_of(components: &[Vec<DeclId>]) -> FxHashMap<DeclId, usize> {
    let mut map = FxHashMap::default();
    for (i, component) in components.iter().enumerate() {
        for &decl in component {
            map.insert(decl, i);
        }
    }
    map
}
