//! Built-in importer descriptors.
//!
//! One descriptor per concrete importer implementation. The parsers and
//! decrypters themselves live outside this crate; only their metadata is
//! registered here. Registration order is alphabetical by manager, with the
//! preferred variant first within a manager (the name-only fallback in
//! `ManagerRegistry::resolve` is the first registered match).

use crate::capability::Cap;
use crate::manager::ManagerDescriptor;

/// 組み込みディスクリプタ一式を登録順で返す
pub fn builtin() -> Vec<ManagerDescriptor> {
    let import = Cap::IMPORT;
    let file = Cap::IMPORT.union(Cap::FORMAT);
    let vault = Cap::IMPORT.union(Cap::FORMAT).union(Cap::DECRYPT);

    vec![
        ManagerDescriptor::versioned("1password-1pif", "1password", "1pif", "4", file),
        ManagerDescriptor::versioned("1password-csv-v4", "1password", "csv", "4", file),
        ManagerDescriptor::versioned("1password-csv-v6", "1password", "csv", "6", file),
        ManagerDescriptor::versioned("1password-csv-v8", "1password", "csv", "8", file),
        ManagerDescriptor::new("aegis-json", "aegis", "json", file),
        ManagerDescriptor::new("andotp-json", "andotp", "json", file),
        ManagerDescriptor::new("apple-keychain", "apple-keychain", "keychain", file),
        ManagerDescriptor::new("bitwarden-csv", "bitwarden", "csv", file),
        ManagerDescriptor::new("bitwarden-json", "bitwarden", "json", file),
        ManagerDescriptor::new("buttercup-csv", "buttercup", "csv", file),
        ManagerDescriptor::new("chrome-csv", "chrome", "csv", file),
        ManagerDescriptor::new("clipperz-html", "clipperz", "html", file),
        // Generic fallback, only ever selected by explicit name.
        ManagerDescriptor::new("csv", "csv", "csv", file),
        ManagerDescriptor::new("dashlane-csv", "dashlane", "csv", file),
        ManagerDescriptor::new("dashlane-json", "dashlane", "json", file),
        ManagerDescriptor::new("encryptr-csv", "encryptr", "csv", file),
        ManagerDescriptor::new("enpass-csv", "enpass", "csv", file),
        ManagerDescriptor::versioned("enpass-json-v6", "enpass", "json", "6", file),
        ManagerDescriptor::new("firefox-csv", "firefox", "csv", file),
        ManagerDescriptor::new("fpm-xml", "fpm", "xml", file),
        ManagerDescriptor::new("freeotp-plus-json", "freeotp+", "json", file),
        ManagerDescriptor::new("gnome-authenticator-json", "gnome-authenticator", "json", file),
        // libsecret API integration, no file format.
        ManagerDescriptor::new("gnome-keyring", "gnome-keyring", "", import),
        ManagerDescriptor::new("gorilla-csv", "gorilla", "csv", file),
        // Container decrypter, not an importer.
        ManagerDescriptor::new("gpg", "gpg", "gpg", Cap::DECRYPT),
        ManagerDescriptor::new("kedpm-xml", "kedpm", "xml", file),
        ManagerDescriptor::new("keepass-kdbx", "keepass", "kdbx", vault),
        ManagerDescriptor::new("keepass-csv", "keepass", "csv", file),
        ManagerDescriptor::new("keepass-xml", "keepass", "xml", file),
        ManagerDescriptor::new("keepassx-xml", "keepassx", "xml", file),
        ManagerDescriptor::new("keepassxc-csv", "keepassxc", "csv", file),
        ManagerDescriptor::new("keeper-csv", "keeper", "csv", file),
        ManagerDescriptor::new("lastpass-csv", "lastpass", "csv", file),
        ManagerDescriptor::new("myki-csv", "myki", "csv", file),
        // NetworkManager system connections, no file format.
        ManagerDescriptor::new("network-manager", "network-manager", "", import),
        ManagerDescriptor::new("nordpass-csv", "nordpass", "csv", file),
        ManagerDescriptor::new("padlock-csv", "padlock", "csv", file),
        ManagerDescriptor::new("passman-csv", "passman", "csv", file),
        ManagerDescriptor::new("passman-json", "passman", "json", file),
        ManagerDescriptor::new("passpack-csv", "passpack", "csv", file),
        ManagerDescriptor::new("passpie-yaml", "passpie", "yaml", file),
        ManagerDescriptor::new("pwsafe-xml", "pwsafe", "xml", file),
        ManagerDescriptor::new("revelation-xml", "revelation", "xml", file),
        ManagerDescriptor::new("roboform-csv", "roboform", "csv", file),
        ManagerDescriptor::new("saferpass-csv", "saferpass", "csv", file),
        ManagerDescriptor::new("upm-csv", "upm", "csv", file),
        ManagerDescriptor::new("zoho-csv", "zoho", "csv", file),
    ]
}

#[cfg(test)]
#[path = "managers_test.rs"]
mod tests;
