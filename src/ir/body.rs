//! Arena storage for the entities of one method body.
//!
//! Locals, values, and statements are stored in append-only vectors and
//! addressed by typed index handles. Handles are only ever minted by the
//! arena that owns the entity, so a handle is a stable identity for the
//! lifetime of the body: two uses of the same local share one
//! [`LocalId`] even though they appear in different statements.

use smol_str::SmolStr;

use crate::base::SourcePos;

use super::stmt::StmtKind;
use super::value::ValueKind;

/// Identity handle for a [`LocalData`] in its owning [`Body`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalId(u32);

/// Identity handle for a [`ValueData`] in its owning [`Body`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValueId(u32);

/// Identity handle for a [`StmtData`] in its owning [`Body`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StmtId(u32);

impl LocalId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl ValueId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl StmtId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A named, typed variable. Identity is stable across references.
#[derive(Debug, Clone)]
pub struct LocalData {
    pub name: SmolStr,
    pub type_full_name: SmolStr,
}

/// A value occurrence: its variant shape plus its static type.
#[derive(Debug, Clone)]
pub struct ValueData {
    pub kind: ValueKind,
    pub type_full_name: SmolStr,
}

/// A body statement: its variant shape plus its source position.
#[derive(Debug, Clone)]
pub struct StmtData {
    pub kind: StmtKind,
    pub pos: SourcePos,
}

/// Arena for the locals, values, and statements of one method body.
#[derive(Debug, Clone, Default)]
pub struct Body {
    locals: Vec<LocalData>,
    values: Vec<ValueData>,
    stmts: Vec<StmtData>,
}

impl Body {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a local variable, returning its identity handle.
    pub fn add_local(&mut self, name: impl Into<SmolStr>, ty: impl Into<SmolStr>) -> LocalId {
        let id = LocalId(self.locals.len() as u32);
        self.locals.push(LocalData {
            name: name.into(),
            type_full_name: ty.into(),
        });
        id
    }

    /// Record a value occurrence, returning its identity handle.
    pub fn add_value(&mut self, kind: ValueKind, ty: impl Into<SmolStr>) -> ValueId {
        let id = ValueId(self.values.len() as u32);
        self.values.push(ValueData {
            kind,
            type_full_name: ty.into(),
        });
        id
    }

    /// Record a statement, returning its identity handle.
    pub fn add_stmt(&mut self, kind: StmtKind, pos: SourcePos) -> StmtId {
        let id = StmtId(self.stmts.len() as u32);
        self.stmts.push(StmtData { kind, pos });
        id
    }

    /// Record a use of `local` as a value, typed by the local's own type.
    pub fn local_value(&mut self, local: LocalId) -> ValueId {
        let ty = self.local(local).type_full_name.clone();
        self.add_value(ValueKind::Local(local), ty)
    }

    /// Record a constant value with the given source text and type.
    pub fn constant(&mut self, code: impl Into<SmolStr>, ty: impl Into<SmolStr>) -> ValueId {
        self.add_value(ValueKind::Constant { code: code.into() }, ty)
    }

    pub fn local(&self, id: LocalId) -> &LocalData {
        &self.locals[id.index()]
    }

    pub fn value(&self, id: ValueId) -> &ValueData {
        &self.values[id.index()]
    }

    pub fn stmt(&self, id: StmtId) -> &StmtData {
        &self.stmts[id.index()]
    }

    /// All declared locals in declaration order.
    pub fn locals(&self) -> impl Iterator<Item = (LocalId, &LocalData)> {
        self.locals
            .iter()
            .enumerate()
            .map(|(i, data)| (LocalId(i as u32), data))
    }

    pub fn local_count(&self) -> usize {
        self.locals.len()
    }

    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }
}
