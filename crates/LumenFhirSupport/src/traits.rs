/// Metadata for choice (`field[x]`) element sites.
///
/// Implemented by the generated per-site sum types. The runtime type check
/// the original performed with `instanceof` is static here; what remains is
/// the declared member-name set, which serializers and path evaluators use
/// to map a variant back to its wire-level field name.
pub trait ChoiceElement {
    /// The base name of the choice element without the `[x]` suffix.
    fn base_name() -> &'static str;

    /// All field names this choice site can manifest as, in declaration
    /// order (e.g. `["versionAlgorithmString", "versionAlgorithmCoding"]`).
    fn possible_field_names() -> &'static [&'static str];

    /// The field name for the currently held variant.
    fn field_name(&self) -> &'static str;
}
