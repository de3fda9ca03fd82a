//! Text rendering of containers and stubs.

use super::Emitter;

/// A validated, target-typed function signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Stub {
    pub name: String,
    /// `(name, target type)` in declaration order
    pub params: Vec<(String, String)>,
    pub return_type: String,
}

impl Emitter<'_> {
    pub(super) fn render_container(&self, name: &str, stubs: &[Stub]) -> String {
        let c = self.c();
        let mut out = format!(
            "{}object{} {}{}{} {}{{{}\n",
            c.dim, c.reset, c.blue, name, c.reset, c.dim, c.reset
        );
        for stub in stubs {
            out.push_str(&self.config.indent);
            out.push_str(&self.render_stub(stub));
            out.push('\n');
        }
        out.push_str(&format!("{}}}{}\n", c.dim, c.reset));
        out
    }

    fn render_stub(&self, stub: &Stub) -> String {
        let c = self.c();
        let params: Vec<String> = stub
            .params
            .iter()
            .map(|(name, ty)| format!("{}{}:{} {}{}{}", name, c.dim, c.reset, c.green, ty, c.reset))
            .collect();

        format!(
            "{}def{} {}{}{}{}({}{}{}){}: {}{}{} {}={} {}",
            c.dim,
            c.reset,
            c.blue,
            stub.name,
            c.reset,
            c.dim,
            c.reset,
            params.join(&format!("{}, {}", c.dim, c.reset)),
            c.dim,
            c.reset,
            c.green,
            stub.return_type,
            c.reset,
            c.dim,
            c.reset,
            self.config.placeholder
        )
    }
}
