//! Reusable fixture content

use super::env::TestEnv;

/// Minimal SVG document
pub const SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24"><rect width="24" height="24"/></svg>"#;

/// Shell rasterizer that writes a placeholder PNG to the `--export-png=`
/// target and appends its arguments to `raster.log` next to itself.
pub const FAKE_RASTERIZER: &str = r#"out=""
for arg in "$@"; do
  case "$arg" in
    --version) exit 0 ;;
    --export-png=*) out="${arg#--export-png=}" ;;
  esac
done
[ -n "$out" ] || exit 2
printf 'PNG' > "$out"
echo "$*" >> "$(dirname "$0")/raster.log"
"#;

/// Rasterizer that fails every render
pub const FAILING_RASTERIZER: &str = r#"case "$1" in
  --version) exit 0 ;;
esac
exit 3
"#;

/// `.gitmodules` with two submodules
pub const GITMODULES: &str = r#"[submodule "Extern/zlib"]
	path = Extern/zlib
	url = https://example.com/zlib.git
[submodule "Extern/png"]
	path = Extern/png
	url = https://example.com/png.git
"#;

impl TestEnv {
    /// Install a shell rasterizer and point `contentkit.toml` at it.
    ///
    /// The script runs through `sh` so it never has to be executable.
    pub fn with_rasterizer_script(&self, script: &str) {
        self.write_project_file("tools/rasterize.sh", script);
        let script_path = self.project_path("tools/rasterize.sh");
        self.write_project_file(
            "contentkit.toml",
            &format!(
                "[rasterizer]\ncommand = \"sh\"\nargs = [{:?}]\n",
                script_path.to_string_lossy()
            ),
        );
    }

    /// Lines the fake rasterizer logged
    pub fn raster_log(&self) -> Vec<String> {
        let path = self.project_path("tools/raster.log");
        std::fs::read_to_string(path)
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
