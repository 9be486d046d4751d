//! Migration script template for the external toolchain.

/// Render the deploy script for an artifact named `qualified_name`.
///
/// The name appears three times: the binding, the `artifacts.require` lookup,
/// and the `deployer.deploy` call. The lookup must match the compiled contract
/// name exactly or the toolchain cannot resolve the artifact.
pub fn render_migration_script(qualified_name: &str) -> String {
    format!(
        "const {qualified_name} = artifacts.require(\"{qualified_name}\");\n\
         \n\
         module.exports = function (deployer) {{\n\
         \x20 deployer.deploy({qualified_name});\n\
         }};\n"
    )
}
