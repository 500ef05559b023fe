//! The `map` command: list every predicate call with its field types.

use std::io::{self, Write};

use lgc_check::{map_predicates, PredicateMap, SchemaResolver};
use lgc_ir::decode_entries;

use super::{read_input, CommandOptions};
use crate::CliError;

/// Map a tree held in memory and write the listing to `out`.
pub fn run_map<R, W>(source: &str, resolver: R, out: &mut W) -> Result<PredicateMap, CliError>
where
    R: SchemaResolver,
    W: Write,
{
    let entries = decode_entries(source)?;
    let mut map = map_predicates(&entries, resolver)?;
    map.annotate_types();
    render_map(&map, out)?;
    Ok(map)
}

/// Write the listing:
///
/// ```text
/// 2 predicate(s) found
///
/// Parent : 1 call(s)
///   Parent(p:, c:) : 2 argument(s)
///     p: {variable: p}
///     c: {variable: c}
/// ```
pub fn render_map<W: Write>(map: &PredicateMap, out: &mut W) -> io::Result<()> {
    writeln!(out, "{} predicate(s) found", map.len())?;
    for (name, calls) in map.iter() {
        writeln!(out)?;
        writeln!(out, "{name} : {} call(s)", calls.len())?;
        for call in calls {
            writeln!(out, "  {} : {} argument(s)", call.full_text, call.arity())?;
            for field in &call.fields {
                match &field.ty {
                    Some(ty) => writeln!(out, "    {}: {ty}", field.name)?,
                    None => writeln!(out, "    {}: ?", field.name)?,
                }
            }
        }
    }
    out.flush()
}

/// Run `map` as configured on the command line, writing to stdout.
pub fn map_file(options: &CommandOptions) -> Result<(), CliError> {
    let source = read_input(options.input.as_deref())?;
    let resolver = options.schema_source()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_map(&source, resolver, &mut out)?;
    Ok(())
}
