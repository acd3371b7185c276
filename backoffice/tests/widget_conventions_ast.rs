use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree, Visibility};

const REQUIRED_WIDGET_FILES: [&str; 5] =
    ["mod.rs", "event.rs", "model.rs", "reducer.rs", "state.rs"];

#[test]
fn given_widgets_when_validating_conventions_then_all_modules_comply() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let widgets_dir = manifest_dir.join("src/widgets");

    let mut violations: Vec<String> = Vec::new();

    let declared = declared_modules(&widgets_dir.join("mod.rs"), &mut violations);
    let on_disk = child_dirs(&widgets_dir);
    if declared != on_disk {
        violations.push(format!(
            "{}: declared widgets {:?} do not match directories {:?}",
            widgets_dir.display(),
            declared,
            on_disk
        ));
    }

    for widget in &declared {
        validate_widget(&widgets_dir.join(widget), widget, &mut violations);
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

fn validate_widget(dir: &Path, widget: &str, violations: &mut Vec<String>) {
    for required in REQUIRED_WIDGET_FILES {
        if !dir.join(required).is_file() {
            violations.push(format!("{}: missing {required}", dir.display()));
        }
    }

    let prefix = snake_to_pascal_case(widget);
    validate_event_file(&dir.join("event.rs"), &prefix, violations);
    validate_state_file(&dir.join("state.rs"), &prefix, violations);

    let view_dir = dir.join("view");
    if !view_dir.is_dir() {
        violations.push(format!("{}: missing view/", dir.display()));
        return;
    }

    let declared = declared_modules(&view_dir.join("mod.rs"), violations);
    let on_disk = child_rs_files(&view_dir);
    if declared != on_disk {
        violations.push(format!(
            "{}: declared views {:?} do not match files {:?}",
            view_dir.display(),
            declared,
            on_disk
        ));
    }

    for view in &declared {
        validate_view_file(&view_dir.join(format!("{view}.rs")), violations);
    }
}

fn validate_event_file(path: &Path, prefix: &str, violations: &mut Vec<String>) {
    let Some(file) = parse(path, violations) else {
        return;
    };

    let enums: BTreeSet<String> = file
        .items
        .iter()
        .filter_map(|item| match item {
            Item::Enum(item_enum) => Some(item_enum.ident.to_string()),
            _ => None,
        })
        .collect();

    for suffix in ["Intent", "Event"] {
        let expected = format!("{prefix}{suffix}");
        if !enums.contains(&expected) {
            violations.push(format!(
                "{}: expected enum {expected}",
                path.display()
            ));
        }
    }
}

fn validate_state_file(path: &Path, prefix: &str, violations: &mut Vec<String>) {
    let Some(file) = parse(path, violations) else {
        return;
    };
    let expected = format!("{prefix}State");

    let state = file.items.iter().find_map(|item| match item {
        Item::Struct(item_struct) if item_struct.ident == expected => {
            Some(item_struct)
        },
        _ => None,
    });

    match state {
        Some(item_struct) => {
            if is_pub_crate(&item_struct.vis)
                || matches!(item_struct.vis, Visibility::Public(_))
            {
                violations.push(format!(
                    "{}: {expected} must stay private to its widget",
                    path.display()
                ));
            }
        },
        None => violations.push(format!(
            "{}: expected struct {expected}",
            path.display()
        )),
    }
}

fn validate_view_file(path: &Path, violations: &mut Vec<String>) {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            violations.push(format!("{}: unreadable: {err}", path.display()));
            return;
        },
    };
    let Some(file) = parse(path, violations) else {
        return;
    };
    let expected_prefix = file_stem_pascal_case(path);

    for forbidden in [
        "crate::app::",
        "log::",
        "std::fs::",
        "Task::",
        "iced::Task",
    ] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden pattern in view: {forbidden}",
                path.display()
            ));
        }
    }

    let mut view_count = 0usize;
    let mut props_names: Vec<String> = Vec::new();

    for item in &file.items {
        match item {
            Item::Fn(item_fn) if item_fn.sig.ident == "view" => {
                if is_pub_crate(&item_fn.vis) {
                    view_count += 1;
                } else {
                    violations.push(format!(
                        "{}: view must be pub(crate)",
                        path.display()
                    ));
                }
            },
            Item::Struct(item_struct) => {
                let name = item_struct.ident.to_string();
                if name.ends_with("Props") {
                    props_names.push(name);
                }
            },
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    path.display()
                ));
            },
            _ => {},
        }
    }

    if view_count != 1 {
        violations.push(format!(
            "{}: expected exactly one pub(crate) fn view, found {view_count}",
            path.display()
        ));
    }

    if props_names.len() != 1 {
        violations.push(format!(
            "{}: expected exactly one *Props type, found {}",
            path.display(),
            props_names.len()
        ));
    }

    for name in props_names {
        if name != format!("{expected_prefix}Props") {
            violations.push(format!(
                "{}: props type '{name}' must be named '{expected_prefix}Props'",
                path.display()
            ));
        }
    }
}

fn declared_modules(
    mod_rs: &Path,
    violations: &mut Vec<String>,
) -> BTreeSet<String> {
    let mut declared = BTreeSet::new();
    let Some(file) = parse(mod_rs, violations) else {
        return declared;
    };

    for item in &file.items {
        match item {
            Item::Mod(item_mod) if item_mod.content.is_none() => {
                declared.insert(item_mod.ident.to_string());
            },
            Item::Mod(item_mod) => violations.push(format!(
                "{}: inline module '{}' is forbidden",
                mod_rs.display(),
                item_mod.ident
            )),
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    mod_rs.display()
                ));
            },
            _ => {},
        }
    }

    declared
}

fn parse(path: &Path, violations: &mut Vec<String>) -> Option<syn::File> {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            violations.push(format!("{}: unreadable: {err}", path.display()));
            return None;
        },
    };

    match syn::parse_file(&source) {
        Ok(file) => Some(file),
        Err(err) => {
            violations.push(format!("{}: parse failed: {err}", path.display()));
            None
        },
    }
}

fn child_dirs(dir: &Path) -> BTreeSet<String> {
    read_dir(dir)
        .into_iter()
        .filter(|path| path.is_dir())
        .filter_map(|path| file_name(&path))
        .collect()
}

fn child_rs_files(dir: &Path) -> BTreeSet<String> {
    read_dir(dir)
        .into_iter()
        .filter(|path| path.extension().is_some_and(|ext| ext == "rs"))
        .filter(|path| !path.ends_with("mod.rs"))
        .filter_map(|path| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
        })
        .collect()
}

fn read_dir(dir: &Path) -> Vec<PathBuf> {
    fs::read_dir(dir)
        .unwrap_or_else(|err| {
            panic!("failed to read dir {}: {err}", dir.display())
        })
        .map(|entry| {
            entry
                .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"))
                .path()
        })
        .collect()
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
}

fn file_stem_pascal_case(file_path: &Path) -> String {
    let stem = file_path
        .file_stem()
        .unwrap_or_else(|| panic!("missing stem for {}", file_path.display()))
        .to_string_lossy()
        .to_string();
    snake_to_pascal_case(&stem)
}

fn snake_to_pascal_case(value: &str) -> String {
    value
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut pascal = String::new();
            pascal.extend(first.to_uppercase());
            pascal.push_str(chars.as_str());
            pascal
        })
        .collect::<String>()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}
