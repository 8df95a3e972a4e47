use lutra_errors::Diagnostic;
use salsa::Accumulator as _;

#[salsa::input(debug)]
pub struct File {
    #[returns(ref)]
    pub path: camino::Utf8PathBuf,
    #[returns(deref)]
    pub text: String,
}

#[salsa::tracked]
pub fn check_file(db: &dyn salsa::Database, file: File) {
    let parsed = lutra_parse::module(file.text(db));
    for diagnostic in parsed.diagnostics() {
        Diagnostic::new(diagnostic.severity(), diagnostic.message(), diagnostic.range())
            .accumulate(db);
    }
}
