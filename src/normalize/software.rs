// dpkg status database parser

use crate::models::SoftwarePackage;

/// Installed packages from a dpkg `status` file, in file order.
///
/// Stanzas are separated by blank lines. Continuation lines (leading space) are skipped,
/// so `description` is the one-line synopsis.
pub fn parse_packages(status: &str) -> Vec<SoftwarePackage> {
    let mut packages = Vec::new();
    let mut current = SoftwarePackage::default();
    let mut installed = false;

    for line in status.lines() {
        if line.trim().is_empty() {
            flush(&mut packages, &mut current, &mut installed);
            continue;
        }
        if line.starts_with(' ') || line.starts_with('\t') {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match key {
            "Package" => current.name = value.to_string(),
            "Version" => current.version = value.to_string(),
            "Architecture" => current.architecture = value.to_string(),
            "Description" => current.description = value.to_string(),
            "Status" => installed = value.split_whitespace().last() == Some("installed"),
            _ => {}
        }
    }
    flush(&mut packages, &mut current, &mut installed);
    packages
}

fn flush(
    packages: &mut Vec<SoftwarePackage>,
    current: &mut SoftwarePackage,
    installed: &mut bool,
) {
    let pkg = std::mem::take(current);
    if *installed && !pkg.name.is_empty() {
        packages.push(pkg);
    }
    *installed = false;
}
