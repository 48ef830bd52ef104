//! Command-line interface and end-to-end pack generation

use crate::compositing::{CompositorConfig, MaskCompositor};
use crate::io::bundle::{TemplateLayout, copy_file, create_texture_tree};
use crate::io::configuration::{
    DEFAULT_OUTPUT_ROOT, DEFAULT_PALETTE_DIR, DEFAULT_PICTURES_DIR, DEFAULT_TEMPLATE_DIR,
    ICON_FILE_NAME, MASK_ALPHA_THRESHOLD, MAX_RENAME_ATTEMPTS, METADATA_FILE_NAME,
    OVERLAY_OPACITY, PACK_RESOLUTION, SATURATION_ADJUSTMENT,
};
use crate::io::error::{PackError, Result, invalid_parameter};
use crate::io::image::{display_name, load_rgba, save_rgba};
use crate::io::progress::ProgressManager;
use crate::io::prompt::{ConsolePrompter, NamingOptions, Prompter, resolve_destination};
use crate::palette::normalizer::prune_stale;
use crate::palette::{NormalizeEvent, Palette, PaletteNormalizer, PaletteSelector};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "palettepack")]
#[command(
    author,
    version,
    about = "Generate a themed texture pack by masking template textures with your own pictures"
)]
/// Command-line arguments for the pack generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Template pack providing metadata, icon and texture silhouettes
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_TEMPLATE_DIR)]
    pub template: PathBuf,

    /// Directory of raw pictures to build the palette from
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_PICTURES_DIR)]
    pub pictures: PathBuf,

    /// Directory the normalized palette is written to and read from
    #[arg(short = 'P', long, value_name = "DIR", default_value = DEFAULT_PALETTE_DIR)]
    pub palette: PathBuf,

    /// Directory the new pack is created in
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_ROOT)]
    pub output_root: PathBuf,

    /// Pack name (prompted for when omitted)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Icon copied into the pack instead of the template's own
    #[arg(short, long, value_name = "FILE")]
    pub icon: Option<PathBuf>,

    /// Random seed for reproducible palette selection
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Edge length in pixels of palette entries and generated textures
    #[arg(short, long, default_value_t = PACK_RESOLUTION)]
    pub resolution: u32,

    /// Remove palette entries whose raw picture no longer exists
    #[arg(long)]
    pub prune_palette: bool,

    /// Accept a renamed pack without asking when the name is taken
    #[arg(short, long)]
    pub yes: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Icon source: the override when given, the template's icon otherwise
    pub fn icon_source(&self) -> PathBuf {
        self.icon
            .clone()
            .unwrap_or_else(|| TemplateLayout::new(&self.template).icon_path())
    }
}

/// Summary of a completed run
#[derive(Clone, Debug)]
pub struct PackReport {
    /// Root directory of the generated pack
    pub pack_root: PathBuf,
    /// Normalized palette entries written this run
    pub normalized: Vec<PathBuf>,
    /// Stale palette entries removed this run
    pub pruned: Vec<PathBuf>,
    /// Generated textures with the palette index each one used
    pub textures: Vec<(PathBuf, usize)>,
}

/// Orchestrates a full run: normalize, name, copy, composite
pub struct PackGenerator {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl PackGenerator {
    /// Create a new generator with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run against the process console
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any stage
    pub fn process(&mut self) -> Result<PackReport> {
        self.process_with(&mut ConsolePrompter::stdio())
    }

    /// Run with the given prompter answering name and confirmation questions
    ///
    /// The palette is loaded and checked before the pack directory is created,
    /// so an empty palette leaves no output behind. Any later failure stops the
    /// run, and directories and files created before it are left in place.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any stage
    pub fn process_with<P: Prompter + ?Sized>(&mut self, prompter: &mut P) -> Result<PackReport> {
        if self.cli.resolution == 0 {
            return Err(invalid_parameter(
                "resolution",
                &self.cli.resolution,
                &"must be at least 1 pixel",
            ));
        }

        let normalized = self.normalize_palette()?;
        let pruned = if self.cli.prune_palette {
            prune_stale(&self.cli.pictures, &self.cli.palette)?
        } else {
            Vec::new()
        };

        let palette = Palette::load_dir(&self.cli.palette, self.cli.resolution)?;
        if palette.is_empty() {
            return Err(PackError::EmptyPalette {
                location: self.cli.palette.clone(),
            });
        }

        let pack_root = self.create_pack_root(prompter)?;
        let layout = TemplateLayout::new(&self.cli.template);

        copy_file(&layout.metadata_path(), &pack_root.join(METADATA_FILE_NAME))?;
        copy_file(&self.cli.icon_source(), &pack_root.join(ICON_FILE_NAME))?;
        let texture_dir = create_texture_tree(&pack_root)?;

        let textures = self.generate_textures(&layout, &palette, &texture_dir)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }
        log::info!(
            "Generated {} textures in {}",
            textures.len(),
            pack_root.display()
        );

        Ok(PackReport {
            pack_root,
            normalized,
            pruned,
            textures,
        })
    }

    fn normalize_palette(&mut self) -> Result<Vec<PathBuf>> {
        let normalizer = PaletteNormalizer::new(self.cli.resolution, SATURATION_ADJUSTMENT);
        let pictures = &self.cli.pictures;
        let progress = &mut self.progress_manager;

        let written =
            normalizer.normalize_directory_with(pictures, &self.cli.palette, |event| match event {
                NormalizeEvent::Listed(count) => {
                    log::info!("Normalizing {count} pictures from {}", pictures.display());
                    if let Some(pm) = progress.as_mut() {
                        pm.start_stage("Normalizing", count);
                    }
                }
                NormalizeEvent::Started(path) => {
                    if let Some(pm) = progress.as_ref() {
                        pm.start_file(path);
                    }
                }
                NormalizeEvent::Finished(_) => {
                    if let Some(pm) = progress.as_ref() {
                        pm.complete_file();
                    }
                }
            })?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish_stage();
        }
        Ok(written)
    }

    fn create_pack_root<P: Prompter + ?Sized>(&self, prompter: &mut P) -> Result<PathBuf> {
        let requested = match &self.cli.name {
            Some(name) => name.clone(),
            None => prompter.ask("Enter Pack Name: ")?,
        };

        let options = NamingOptions {
            auto_confirm: self.cli.yes,
            max_attempts: MAX_RENAME_ATTEMPTS,
        };
        let mut rng = self
            .cli
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        resolve_destination(
            &self.cli.output_root,
            &requested,
            options,
            prompter,
            &mut rng,
        )
    }

    fn generate_textures(
        &mut self,
        layout: &TemplateLayout,
        palette: &Palette,
        texture_dir: &Path,
    ) -> Result<Vec<(PathBuf, usize)>> {
        let compositor = MaskCompositor::new(CompositorConfig {
            resolution: self.cli.resolution,
            alpha_threshold: MASK_ALPHA_THRESHOLD,
            opacity: OVERLAY_OPACITY,
        });
        let mut selector = PaletteSelector::from_seed_option(self.cli.seed);

        let templates = layout.list_textures()?;
        log::info!(
            "Compositing {} templates with {} palette entries",
            templates.len(),
            palette.len()
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_stage("Compositing", templates.len());
        }

        let mut generated = Vec::with_capacity(templates.len());
        for template_path in &templates {
            if let Some(ref pm) = self.progress_manager {
                pm.start_file(template_path);
            }

            let template = load_rgba(template_path)?;
            let composite = compositor.composite(&template, palette, &mut selector)?;
            let output_path = texture_dir.join(display_name(template_path));
            save_rgba(&composite.image, &output_path)?;

            log::debug!(
                "{} <- palette entry {}",
                output_path.display(),
                palette
                    .get(composite.palette_index)
                    .map_or("<unknown>", |entry| entry.name())
            );
            generated.push((output_path, composite.palette_index));

            if let Some(ref pm) = self.progress_manager {
                pm.complete_file();
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish_stage();
        }
        Ok(generated)
    }
}
