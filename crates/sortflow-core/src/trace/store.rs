use super::Step;

/// Log append-only de los steps de una ejecución.
///
/// El engine lo vacía al inicio de cada `execute`; entre llamadas conserva
/// la traza de la última ejecución como estado de trabajo.
pub trait StepLog {
    /// Agrega un step al final del log.
    fn append(&mut self, step: Step);
    /// Lista los steps en orden de emisión.
    fn list(&self) -> Vec<Step>;
    /// Descarta todo el contenido.
    fn clear(&mut self);
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool { self.len() == 0 }
}

#[derive(Debug, Default)]
pub struct InMemoryStepLog { pub inner: Vec<Step> }

impl StepLog for InMemoryStepLog {
    fn append(&mut self, step: Step) { self.inner.push(step); }
    fn list(&self) -> Vec<Step> { self.inner.clone() }
    fn clear(&mut self) { self.inner.clear(); }
    fn len(&self) -> usize { self.inner.len() }
}
