//! CST → owned model lowering.

use std::ops::Range;

use crate::parser::{self, ast};

use super::{
    FunctionBody, FunctionDecl, ItemType, KindTest, Module, ModuleKind, Occurrence, Param,
    QualifiedName, SequenceType, VersionDecl,
};

pub(super) fn lower_root(root: &ast::Root) -> Module {
    let version = root.version_decl().map(|v| VersionDecl {
        version: v.version().map(|s| s.unescaped()),
        encoding: v.encoding().map(|s| s.unescaped()),
    });

    let kind = match root.module_decl() {
        Some(decl) => ModuleKind::Library {
            prefix: decl.prefix().map(|t| t.text().to_string()).unwrap_or_default(),
            uri: decl.uri().map(|s| s.unescaped()).unwrap_or_default(),
        },
        None => ModuleKind::Main,
    };

    let functions: Vec<FunctionDecl> = root
        .prolog()
        .map(|prolog| prolog.functions().filter_map(|f| lower_function(&f)).collect())
        .unwrap_or_default();

    tracing::debug!(functions = functions.len(), "lowered module");
    Module::new(version, kind, functions)
}

fn lower_function(decl: &ast::FunctionDecl) -> Option<FunctionDecl> {
    let name = lower_qname(&decl.name()?)?;
    let params = decl
        .params()
        .map(|p| lower_param(&p))
        .collect::<Option<Vec<_>>>()?;
    let return_type = match decl.return_type() {
        Some(type_decl) => Some(lower_sequence_type(&type_decl.sequence_type()?)?),
        None => None,
    };
    let body = match decl.body()? {
        parser::FunctionBody::Enclosed(_) => FunctionBody::Enclosed,
        parser::FunctionBody::External(_) => FunctionBody::External,
    };

    Some(FunctionDecl {
        name,
        params,
        return_type,
        body,
        span: span_of(decl.as_cst()),
    })
}

fn lower_param(param: &ast::Param) -> Option<Param> {
    let name = lower_qname(&param.name()?)?;
    let ty = match param.type_decl() {
        Some(type_decl) => Some(lower_sequence_type(&type_decl.sequence_type()?)?),
        None => None,
    };
    Some(Param { name, ty })
}

fn lower_sequence_type(ty: &ast::SequenceType) -> Option<SequenceType> {
    let item = match ty.item_type()? {
        ast::ItemType::Atomic(atomic) => ItemType::Atomic {
            name: lower_qname(&atomic.name()?)?,
        },
        ast::ItemType::KindTest(test) => ItemType::KindTest {
            test: KindTest::from_keyword(test.keyword()?.text())?,
            text: test.compact_text(),
        },
        ast::ItemType::AnyItem(_) => ItemType::AnyItem,
        ast::ItemType::EmptySequence(_) => ItemType::EmptySequence,
    };
    let occurrence = match ty.occurrence() {
        Some(occurrence) => Occurrence::from_indicator(occurrence.indicator()?.text())?,
        None => Occurrence::ExactlyOne,
    };
    Some(SequenceType { item, occurrence })
}

fn lower_qname(name: &ast::QName) -> Option<QualifiedName> {
    let local_part = name.local_part()?.text().to_string();
    let prefix = name.prefix().map(|t| t.text().to_string());
    Some(QualifiedName { prefix, local_part })
}

fn span_of(node: &parser::SyntaxNode) -> Range<usize> {
    let range = node.text_range();
    range.start().into()..range.end().into()
}
