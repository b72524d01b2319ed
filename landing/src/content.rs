//! Fixed page copy: catalog tables, gallery and navigation targets.

/// In-page anchors the home page must render as element ids.
pub const ANCHORS: &[&str] = &["capabilities", "about", "equipment", "gallery", "contact"];

/// Header navigation entry.
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavItem] = &[
    NavItem { label: "Home", href: "/" },
    NavItem { label: "Capabilities", href: "/#capabilities" },
    NavItem { label: "About", href: "/#about" },
    NavItem { label: "Facility", href: "/#equipment" },
    NavItem { label: "Work Gallery", href: "/#gallery" },
];

/// Call-to-action shown after the regular nav links.
pub const QUOTE_LINK: NavItem = NavItem {
    label: "Get a Quote",
    href: "/#contact",
};

pub const QUICK_LINKS: &[NavItem] = &[
    NavItem { label: "Capabilities", href: "/#capabilities" },
    NavItem { label: "About", href: "/#about" },
    NavItem { label: "Facility", href: "/#equipment" },
    NavItem { label: "Work Gallery", href: "/#gallery" },
    NavItem { label: "Contact", href: "/#contact" },
];

pub struct Finish {
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const FINISHES: &[Finish] = &[
    Finish {
        name: "Brush",
        description: "Uniform linear grain pattern for a professional matte appearance",
        image: "https://cdn.wegic.ai/assets/onepage/agent/images/1771275993174.jpg?imageMogr2/format/webp",
    },
    Finish {
        name: "Mirror",
        description: "High-gloss reflective finish for maximum shine and visual impact",
        image: "https://cdn.wegic.ai/assets/onepage/agent/images/1771250873308.jpg?imageMogr2/format/webp",
    },
    Finish {
        name: "Satin",
        description: "Smooth semi-gloss finish balancing elegance with durability",
        image: "https://cdn.wegic.ai/assets/onepage/agent/images/1771250873208.jpg?imageMogr2/format/webp",
    },
];

/// A material or process tile: round thumbnail plus label.
pub struct Tile {
    pub name: &'static str,
    pub image: &'static str,
}

pub const MATERIALS: &[Tile] = &[
    Tile { name: "Aluminum", image: "https://cdn.wegic.ai/assets/onepage/agent/images/1771250686872.jpg?imageMogr2/format/webp" },
    Tile { name: "Brass", image: "https://cdn.wegic.ai/assets/onepage/agent/images/1771250683270.jpg?imageMogr2/format/webp" },
    Tile { name: "Copper", image: "https://cdn.wegic.ai/assets/onepage/agent/images/1771250683271.jpg?imageMogr2/format/webp" },
    Tile { name: "Iron", image: "https://cdn.wegic.ai/assets/onepage/agent/images/1771250683574.jpg?imageMogr2/format/webp" },
    Tile { name: "Steel", image: "https://cdn.wegic.ai/assets/onepage/agent/images/1771250683373.jpg?imageMogr2/format/webp" },
    Tile { name: "Stainless Steel", image: "https://cdn.wegic.ai/assets/onepage/agent/images/1771250686881.jpg?imageMogr2/format/webp" },
    Tile { name: "Zinc", image: "https://cdn.wegic.ai/assets/onepage/agent/images/1771250683375.jpg?imageMogr2/format/webp" },
];

pub const PROCESSES: &[Tile] = &[
    Tile { name: "Buffing", image: "https://cdn.wegic.ai/assets/onepage/agent/images/1771274754249.jpg?imageMogr2/format/webp" },
    Tile { name: "Deburring", image: "https://cdn.wegic.ai/assets/onepage/agent/images/1771274514680.jpg?imageMogr2/format/webp" },
    Tile { name: "Machining", image: "https://cdn.wegic.ai/assets/onepage/agent/images/1771274515084.jpg?imageMogr2/format/webp" },
    Tile { name: "Polishing", image: "https://cdn.wegic.ai/assets/onepage/agent/images/1771275618848.jpg?imageMogr2/format/webp" },
    Tile { name: "Parting Line Cleanup", image: "https://cdn.wegic.ai/assets/onepage/agent/images/1771274514884.jpg?imageMogr2/format/webp" },
    Tile { name: "Weld Cleanup", image: "https://cdn.wegic.ai/assets/onepage/agent/images/1771274514382.jpg?imageMogr2/format/webp" },
];

pub const SHAPES: &[&str] = &[
    "Extrusions",
    "Bar Stock",
    "Round Stock",
    "Tubing",
    "Die Castings",
    "Sand Castings",
    "Fabrications",
];

pub const EQUIPMENT: &[&str] = &[
    "10 Dual Spindle Polishing Machines",
    "4 ACME Auto Buffing Turntables",
    "MaxiStroke Flat Sander",
    "Automatic Buffing Room with 75 fixture capacity",
    "Fadal VMC15XT Machining Center",
];

pub struct GalleryImage {
    pub src: &'static str,
    pub caption: &'static str,
    /// Featured tiles take a 2x2 cell in the grid.
    pub featured: bool,
}

pub const GALLERY: &[GalleryImage] = &[
    GalleryImage {
        src: "https://cdn.wegic.ai/assets/onepage/uploads/2021942976312688641/image/2026/02/16/01KHK5MAT4GGCRFT63TZVXX58R.jpg?imageMogr2/format/webp",
        caption: "Mirror polished brass piece",
        featured: true,
    },
    GalleryImage {
        src: "https://cdn.wegic.ai/assets/onepage/uploads/2021942976312688641/image/2026/02/16/01KHK5MAT4BS06SNTRTTCB2SHZ.jpg?imageMogr2/format/webp",
        caption: "Brass plates with mirror finish",
        featured: false,
    },
    GalleryImage {
        src: "https://cdn.wegic.ai/assets/onepage/uploads/2021942976312688641/image/2026/02/16/01KHKAQ7D3D4XBKH62F99Q8S0J.jpeg?imageMogr2/format/webp",
        caption: "Ornate brass tabernacle with intricate detail",
        featured: false,
    },
    GalleryImage {
        src: "https://cdn.wegic.ai/assets/onepage/uploads/2021942976312688641/image/2026/02/16/01KHKA5P28YMK4CHB69E1MPXWJ.png?imageMogr2/format/webp",
        caption: "Shop scene with polished parts and equipment",
        featured: false,
    },
    GalleryImage {
        src: "https://cdn.wegic.ai/assets/onepage/uploads/2021942976312688641/image/2026/02/16/01KHKA618VCR4YSSB1AQTZAZHB.png?imageMogr2/format/webp",
        caption: "Polished castings beside a Gardner buffing machine",
        featured: false,
    },
    GalleryImage {
        src: "https://cdn.wegic.ai/assets/onepage/uploads/2021942976312688641/image/2026/02/17/01KHM05YWXK943588E61ZGH7JX.jpeg?imageMogr2/format/webp",
        caption: "Chrome toggle switch cover",
        featured: false,
    },
    GalleryImage {
        src: "https://cdn.wegic.ai/assets/onepage/uploads/2021942976312688641/image/2026/02/17/01KHM05YWXZ4GQ4X8ZE81Z6W5T.jpeg?imageMogr2/format/webp",
        caption: "Chrome window crank handle",
        featured: false,
    },
    GalleryImage {
        src: "https://cdn.wegic.ai/assets/onepage/uploads/2021942976312688641/image/2026/02/16/01KHKAQ7D39MGKWGH5GHSZACJS.jpeg?imageMogr2/format/webp",
        caption: "Tabernacle with door open showing interior",
        featured: false,
    },
    GalleryImage {
        src: "https://cdn.wegic.ai/assets/onepage/uploads/2021942976312688641/image/2026/02/17/01KHKZ0158ZAJXPCGDBZ92Q45C.png?imageMogr2/format/webp",
        caption: "Chrome polished casting housing",
        featured: false,
    },
    GalleryImage {
        src: "https://cdn.wegic.ai/assets/onepage/uploads/2021942976312688641/image/2026/02/17/01KHM05YWX6MYHCKETRVT2AF83.jpeg?imageMogr2/format/webp",
        caption: "Chrome cabinet pull handle",
        featured: false,
    },
    GalleryImage {
        src: "https://cdn.wegic.ai/assets/onepage/uploads/2021942976312688641/image/2026/02/17/01KHM05YWX78YV17BXMR8KEBP3.jpeg?imageMogr2/format/webp",
        caption: "Brass exhaust tip with mirror polish",
        featured: false,
    },
    GalleryImage {
        src: "https://cdn.wegic.ai/assets/onepage/uploads/2021942976312688641/image/2026/02/17/01KHM05YWXJD9FKPVBVWQA1RBF.jpeg?imageMogr2/format/webp",
        caption: "Chrome grab bar",
        featured: false,
    },
    GalleryImage {
        src: "https://cdn.wegic.ai/assets/onepage/uploads/2021942976312688641/image/2026/02/17/01KHM05YWX8XGXS603GTC85K7N.jpeg?imageMogr2/format/webp",
        caption: "Brass door lever handle",
        featured: false,
    },
    GalleryImage {
        src: "https://cdn.wegic.ai/assets/onepage/uploads/2021942976312688641/image/2026/02/17/01KHM05YWXGK5KW2N86PX4A0EB.jpeg?imageMogr2/format/webp",
        caption: "Chrome faucet knob",
        featured: false,
    },
    GalleryImage {
        src: "https://cdn.wegic.ai/assets/onepage/uploads/2021942976312688641/image/2026/02/17/01KHM05YWXYCW7WKCKX7QNEZEK.jpeg?imageMogr2/format/webp",
        caption: "Chrome faucet spout",
        featured: false,
    },
    GalleryImage {
        src: "https://cdn.wegic.ai/assets/onepage/uploads/2021942976312688641/image/2026/02/17/01KHM05YWXQBGK60WMQM8Z33GZ.jpeg?imageMogr2/format/webp",
        caption: "Chrome decorative trim panel",
        featured: false,
    },
    GalleryImage {
        src: "https://cdn.wegic.ai/assets/onepage/uploads/2021942976312688641/image/2026/02/16/01KHK5MAT525DNCJB9DVBXN42D.png?imageMogr2/format/webp",
        caption: "Chrome automotive parts",
        featured: false,
    },
    GalleryImage {
        src: "https://cdn.wegic.ai/assets/onepage/uploads/2021942976312688641/image/2026/02/16/01KHK5MAT5V2PG02R4HJ7SE9MB.png?imageMogr2/format/webp",
        caption: "Before and after polishing comparison",
        featured: false,
    },
    GalleryImage {
        src: "https://cdn.wegic.ai/assets/onepage/uploads/2021942976312688641/image/2026/02/17/01KHM0KKVW5N1J0W2JF1FCMMKW.png?imageMogr2/format/webp",
        caption: "Brushed aluminum flat bar",
        featured: false,
    },
    GalleryImage {
        src: "https://cdn.wegic.ai/assets/onepage/uploads/2021942976312688641/image/2026/02/17/01KHM0KKVWKNSW7PMCT0NWY446.png?imageMogr2/format/webp",
        caption: "Chrome exhaust tip with mirror finish",
        featured: false,
    },
    GalleryImage {
        src: "https://cdn.wegic.ai/assets/onepage/uploads/2021942976312688641/image/2026/02/17/01KHM0KKVWA4BZX321S0ZT3WNJ.png?imageMogr2/format/webp",
        caption: "Production run of polished flat bars",
        featured: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_targets_are_known_anchors() {
        for item in NAV_LINKS.iter().chain(QUICK_LINKS).chain([&QUOTE_LINK]) {
            let Some((path, anchor)) = item.href.split_once('#') else {
                assert_eq!(item.href, "/");
                continue;
            };
            assert_eq!(path, "/");
            assert!(ANCHORS.contains(&anchor), "{} -> {}", item.label, item.href);
        }
    }

    #[test]
    fn gallery_urls_point_at_cdn() {
        assert_eq!(GALLERY.len(), 21);
        for image in GALLERY {
            assert!(image.src.starts_with("https://cdn.wegic.ai/"), "{}", image.src);
            assert!(image.src.ends_with("?imageMogr2/format/webp"));
        }
        assert_eq!(GALLERY.iter().filter(|g| g.featured).count(), 1);
    }
}
