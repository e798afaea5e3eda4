//! Stub catalog: what gets staged where
//!
//! The catalog is data, not logic: each entry names a stub id (the path the
//! resolver probes under every search root), the fixed destination relative
//! to the project root, and whether overwriting an existing destination may
//! be confirmed interactively. Destination strings are a contract with the
//! consuming project and must stay stable.
//!
//! A small second table maps stub ids to built-in fallback content, used when
//! a stub exists in no search root. Only artifacts with a sane synthesized
//! default carry a fallback; everything else just skips when unresolved.

/// One stageable artifact
#[derive(Debug, Clone, Copy)]
pub struct StubSpec {
    /// Path probed under each search root
    pub id: &'static str,
    /// Destination path relative to the project root
    pub destination: &'static str,
    /// Overwrite may be confirmed interactively instead of skipped
    pub confirmable: bool,
}

/// Build-tool configuration staged at the project root
pub const CONFIG_STUBS: &[StubSpec] = &[StubSpec {
    id: "vite.config.ts",
    destination: "vite.config.ts",
    confirmable: true,
}];

/// Styling entry point
pub const STYLE_STUBS: &[StubSpec] = &[StubSpec {
    id: "app.css",
    destination: "resources/css/app.css",
    confirmable: false,
}];

/// Frontend entry script
pub const SCRIPT_STUBS: &[StubSpec] = &[StubSpec {
    id: "app.ts",
    destination: "resources/js/app.ts",
    confirmable: true,
}];

/// Layout and component templates
pub const VIEW_STUBS: &[StubSpec] = &[
    StubSpec {
        id: "layouts/AppLayout.vue",
        destination: "resources/js/layouts/AppLayout.vue",
        confirmable: false,
    },
    StubSpec {
        id: "components/NavSidebar.vue",
        destination: "resources/js/components/NavSidebar.vue",
        confirmable: false,
    },
    StubSpec {
        id: "components/PageHeader.vue",
        destination: "resources/js/components/PageHeader.vue",
        confirmable: false,
    },
];

/// Middleware and route definitions
pub const HTTP_STUBS: &[StubSpec] = &[
    StubSpec {
        id: "middleware/HandlePanelRequests.php",
        destination: "app/Http/Middleware/HandlePanelRequests.php",
        confirmable: false,
    },
    StubSpec {
        id: "routes/panel.php",
        destination: "routes/panel.php",
        confirmable: false,
    },
];

/// Account model
pub const MODEL_STUBS: &[StubSpec] = &[StubSpec {
    id: "models/User.php",
    destination: "app/Models/User.php",
    confirmable: false,
}];

/// Per-page admin scaffolding superseded by the shared layout; pruned by the
/// cleanup step
pub const LEGACY_PAGES_DIR: &str = "resources/js/Pages/Admin";

/// All catalog entries in staging order
pub fn all() -> impl Iterator<Item = &'static StubSpec> {
    CONFIG_STUBS
        .iter()
        .chain(STYLE_STUBS)
        .chain(SCRIPT_STUBS)
        .chain(VIEW_STUBS)
        .chain(HTTP_STUBS)
        .chain(MODEL_STUBS)
}

/// Built-in default content for stubs that may be synthesized when no search
/// root provides them
pub fn fallback_content(stub_id: &str) -> Option<&'static str> {
    match stub_id {
        "vite.config.ts" => Some(VITE_CONFIG_FALLBACK),
        "app.css" => Some(APP_CSS_FALLBACK),
        _ => None,
    }
}

const VITE_CONFIG_FALLBACK: &str = r#"import vue from '@vitejs/plugin-vue';
import laravel from 'laravel-vite-plugin';
import tailwindcss from '@tailwindcss/vite';
import path from 'path';
import { defineConfig } from 'vite';

export default defineConfig({
    plugins: [
        laravel({
            input: ['resources/css/app.css', 'resources/js/app.ts'],
            refresh: true,
        }),
        tailwindcss(),
        vue({
            template: {
                transformAssetUrls: {
                    base: null,
                    includeAbsolute: false,
                },
            },
        }),
    ],
    resolve: {
        alias: {
            '@viltkit': path.resolve(__dirname, 'vendor/viltkit/panel/resources/js'),
        },
    },
});
"#;

const APP_CSS_FALLBACK: &str = r#"@import 'tailwindcss';

@source '../js';
@source '../views';

@theme {
    --font-sans: 'Instrument Sans', ui-sans-serif, system-ui, sans-serif;
}
"#;
