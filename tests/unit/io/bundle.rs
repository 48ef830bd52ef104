//! Tests for template layout, file copies and output tree creation

#[cfg(test)]
mod tests {
    use palettepack::io::bundle::{
        TemplateLayout, copy_file, create_texture_tree, texture_dir_under,
    };
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    // Tests layout paths follow the fixed bundle structure
    #[test]
    fn test_layout_paths() {
        let layout = TemplateLayout::new("tpl");
        assert_eq!(layout.root(), Path::new("tpl"));
        assert_eq!(layout.metadata_path(), Path::new("tpl/pack.mcmeta"));
        assert_eq!(layout.icon_path(), Path::new("tpl/pack.png"));
        assert_eq!(
            layout.texture_dir(),
            Path::new("tpl/assets/minecraft/textures/block")
        );
        assert_eq!(texture_dir_under(Path::new("x")), Path::new("x/assets/minecraft/textures/block"));
    }

    // Tests texture listing is sorted and skips directories and other extensions
    #[test]
    fn test_list_textures_filters() {
        let root = TempDir::new().unwrap();
        let layout = TemplateLayout::new(root.path());
        let dir = layout.texture_dir();
        fs::create_dir_all(dir.join("nested.png")).unwrap();
        fs::write(dir.join("stone.png"), "x").unwrap();
        fs::write(dir.join("dirt.PNG"), "x").unwrap();
        fs::write(dir.join("notes.txt"), "x").unwrap();
        fs::write(dir.join("grass.png.mcmeta"), "x").unwrap();

        let textures = layout.list_textures().unwrap();

        assert_eq!(textures, vec![dir.join("dirt.PNG"), dir.join("stone.png")]);
    }

    // Tests a template without a texture folder is an error
    #[test]
    fn test_list_textures_missing_dir() {
        let root = TempDir::new().unwrap();
        assert!(TemplateLayout::new(root.path()).list_textures().is_err());
    }

    // Tests copies are byte-identical
    #[test]
    fn test_copy_file_verbatim() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("pack.mcmeta");
        let dst = dir.path().join("copy.mcmeta");
        let content = b"{\"pack\":{\"pack_format\":69,\"description\":\"x\"}}\n\x00\xff";
        fs::write(&src, content).unwrap();

        let copied = copy_file(&src, &dst).unwrap();

        assert_eq!(copied, content.len() as u64);
        assert_eq!(fs::read(&dst).unwrap(), content);
    }

    // Tests a missing source is reported
    #[test]
    fn test_copy_file_missing_source() {
        let dir = TempDir::new().unwrap();
        assert!(copy_file(&dir.path().join("nope"), &dir.path().join("out")).is_err());
        assert!(!dir.path().join("out").exists());
    }

    // Tests the nested texture folder is created level by level
    #[test]
    fn test_create_texture_tree() {
        let dir = TempDir::new().unwrap();
        let created = create_texture_tree(dir.path()).unwrap();

        assert_eq!(created, texture_dir_under(dir.path()));
        assert!(created.is_dir());
    }

    // Tests an existing tree is not silently reused
    #[test]
    fn test_create_texture_tree_existing() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("assets")).unwrap();
        assert!(create_texture_tree(dir.path()).is_err());
    }
}
