/// Compose a BEM-style class list.
///
/// The result is `base`, then `base--modifier` for every enabled modifier in
/// the order given, then every non-empty `extra` class.
pub fn create_class_name(base: &str, modifiers: &[(&str, bool)], extra: &[&str]) -> String {
    let mut classes = vec![base.to_string()];
    classes.extend(
        modifiers
            .iter()
            .filter(|(_, enabled)| *enabled)
            .map(|(modifier, _)| format!("{base}--{modifier}")),
    );
    classes.extend(
        extra
            .iter()
            .filter(|class| !class.is_empty())
            .map(|class| class.to_string()),
    );
    classes.join(" ")
}
