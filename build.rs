#![forbid(unsafe_code)]

fn main() {
    build_data::set_RUSTC_VERSION();

    // The git values are only available when building from a checkout, so
    // degrade to "unknown" rather than failing the build from a tarball.
    println!("cargo:rustc-env=GIT_COMMIT_SHORT={}",
             build_data::get_git_commit_short().unwrap_or_else(|_| "unknown".to_string()));
    println!("cargo:rustc-env=GIT_BRANCH={}",
             build_data::get_git_branch().unwrap_or_else(|_| "unknown".to_string()));
}
