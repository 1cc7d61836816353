use crate::node::NodeId;

/// Instrumentation hook over unification and clause evaluation.
///
/// Every method has a no-op default, so implementing `Tracer` only costs
/// whatever the implementor's overridden methods cost — the default
/// [`NoopTracer`] compiles down to nothing at every call site.
pub trait Tracer {
    /// Called once per token, after the working set has been recomputed.
    fn context_expanded(&self, token_index: usize, context_count: usize) {
        let _ = (token_index, context_count);
    }

    /// Called once per clause, before it is evaluated.
    fn clause_started(&self, clause_index: usize, clause: &str) {
        let _ = (clause_index, clause);
    }

    /// Called once per clause, after evaluation, with the surviving binding count.
    fn clause_finished(&self, clause_index: usize, survivors: usize) {
        let _ = (clause_index, survivors);
    }

    /// Called when a single binding is dropped during a join or a filter.
    fn binding_eliminated(&self, variable: &str, node: NodeId) {
        let _ = (variable, node);
    }
}

/// The default tracer: every hook is a no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTracer;

impl Tracer for NoopTracer {}

/// A tracer that prints each event to stdout, for interactive debugging.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintTracer;

impl Tracer for PrintTracer {
    fn context_expanded(&self, token_index: usize, context_count: usize) {
        println!("token[{token_index}]: {context_count} contexts");
    }

    fn clause_started(&self, clause_index: usize, clause: &str) {
        println!("clause[{clause_index}] start: {clause:?}");
    }

    fn clause_finished(&self, clause_index: usize, survivors: usize) {
        println!("clause[{clause_index}] done: {survivors} bindings survive");
    }

    fn binding_eliminated(&self, variable: &str, node: NodeId) {
        println!("binding eliminated: {variable} -> {node:?}");
    }
}
