fn main() {
    // `sqlx::migrate!` embeds the migration files at compile time, so a new
    // or edited migration has to trigger a rebuild.
    println!("cargo:rerun-if-changed=migrations");
}
