//! Subroutine definitions and the program root.

use crate::arena::{ConstructArena, ConstructId, DefId};
use crate::ast::{Block, Construct};

/// A subroutine: a name and a straight-line body.
///
/// The program's entry point is also a `Def` - conceptually unnamed, stored
/// with a default label the editor may overwrite.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Def {
    pub name: Option<String>,
    pub body: Block,
}

impl Def {
    /// An unnamed def with a single empty slot.
    pub fn new() -> Self {
        Def {
            name: None,
            body: Block::new(),
        }
    }
}

/// A whole program: the entry point, the named subroutines, and the arena
/// holding every construct either of them references.
///
/// Cloning a program deep-copies all three, and construct/def ids keep
/// resolving to the same nodes in the clone - the execution engine relies
/// on this for its run-time snapshot.
#[derive(Clone, Debug)]
pub struct Program {
    pub main: Def,
    defs: Vec<Def>,
    arena: ConstructArena,
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}

impl Program {
    /// The label `new` gives the entry point.
    pub const MAIN_LABEL: &str = "program";

    /// An empty program: entry point with one unfilled slot, no subroutines.
    pub fn new() -> Self {
        Program {
            main: Def {
                name: Some(Self::MAIN_LABEL.to_string()),
                body: Block::new(),
            },
            defs: Vec::new(),
            arena: ConstructArena::new(),
        }
    }

    // Construct storage

    /// Store a construct and return its id.
    pub fn alloc(&mut self, construct: Construct) -> ConstructId {
        self.arena.alloc(construct)
    }

    /// Look up a construct.
    #[inline]
    pub fn construct(&self, id: ConstructId) -> &Construct {
        self.arena.get(id)
    }

    /// Look up a construct mutably.
    #[inline]
    pub fn construct_mut(&mut self, id: ConstructId) -> &mut Construct {
        self.arena.get_mut(id)
    }

    /// Point the call `id` at `target` (or clear it with `None`).
    ///
    /// Ignored (with a debug assertion) if `id` is not a call - the editor
    /// only offers target menus on call nodes.
    pub fn set_call_target(&mut self, id: ConstructId, target: Option<DefId>) {
        if let Construct::Call(call) = self.arena.get_mut(id) {
            call.target = target;
        } else {
            debug_assert!(false, "set_call_target on a non-call construct");
        }
    }

    // Def list

    /// The named subroutines, in order.
    pub fn defs(&self) -> &[Def] {
        &self.defs
    }

    /// Look up a subroutine.
    #[inline]
    pub fn def(&self, id: DefId) -> &Def {
        &self.defs[id.index()]
    }

    /// Look up a subroutine mutably.
    #[inline]
    pub fn def_mut(&mut self, id: DefId) -> &mut Def {
        &mut self.defs[id.index()]
    }

    /// Insert a fresh subroutine at `n` (clamped to the end) and return its
    /// id.
    ///
    /// Call targets at or past the insertion point shift with the list, so
    /// existing calls keep pointing at the same subroutines.
    pub fn add_def(&mut self, n: usize) -> DefId {
        let at = n.min(self.defs.len());
        self.defs.insert(at, Def::new());
        for construct in self.arena.iter_mut() {
            if let Construct::Call(call) = construct {
                if let Some(target) = call.target {
                    if target.index() >= at {
                        call.target = Some(def_id_at(target.index() + 1));
                    }
                }
            }
        }
        def_id_at(at)
    }

    /// Remove the subroutine at `n`.
    ///
    /// Calls that targeted it become unset (and will fail the readiness
    /// check); targets past it shift down with the list. Out-of-range is
    /// ignored.
    pub fn remove_def(&mut self, n: usize) {
        if n >= self.defs.len() {
            return;
        }
        self.defs.remove(n);
        for construct in self.arena.iter_mut() {
            if let Construct::Call(call) = construct {
                match call.target {
                    Some(target) if target.index() == n => call.target = None,
                    Some(target) if target.index() > n => {
                        call.target = Some(def_id_at(target.index() - 1));
                    }
                    _ => {}
                }
            }
        }
    }
}

fn def_id_at(index: usize) -> DefId {
    DefId::new(u32::try_from(index).unwrap_or(u32::MAX))
}
