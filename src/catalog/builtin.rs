//! The preset tables the editor ships with.

use super::{PresetCatalog, PresetEntry, PresetGroup, ProductCategory, ProductEntry};

type Row = (&'static str, &'static str, &'static str);

const SCENES: &[(&str, &str, &[Row])] = &[
    (
        "studio",
        "Studio",
        &[
            ("white-bg", "White Background", "clean white studio background, seamless backdrop"),
            ("gray-bg", "Gray Background", "neutral gray studio background, seamless backdrop"),
            ("black-bg", "Black Background", "deep black studio background, seamless dark backdrop"),
            ("gradient", "Gradient Background", "smooth gradient studio background"),
            ("colored", "Colored Background", "solid colored studio background"),
            ("textured", "Textured Background", "subtle textured studio backdrop"),
        ],
    ),
    (
        "lifestyle",
        "Lifestyle",
        &[
            ("cafe", "Cafe", "cozy cafe setting, warm ambiance, coffee shop interior"),
            ("office", "Office", "modern office environment, professional workspace"),
            ("outdoor", "Outdoor", "natural outdoor setting, open air environment"),
            ("urban", "Urban Street", "urban street scene, city environment, sidewalk"),
            ("home", "Home Interior", "home interior setting, comfortable living space"),
            ("garden", "Garden", "garden setting, natural greenery, outdoor space"),
            ("beach", "Beach", "beach setting, sand and ocean, coastal environment"),
            ("gym", "Gym/Fitness", "gym environment, fitness studio, workout space"),
        ],
    ),
    (
        "action",
        "Action / Usage",
        &[
            ("wearing", "Person Wearing", "person wearing the product, natural pose"),
            ("holding", "Hand Holding", "hand holding the product, realistic grip"),
            ("flat-lay", "Flat Lay", "flat lay composition, top-down product arrangement"),
            ("hanging", "Hanging/Displayed", "product hanging or displayed on rack"),
            ("in-use", "In Use", "product being actively used, action shot"),
            ("unboxing", "Unboxing", "product unboxing scene, packaging visible"),
        ],
    ),
    (
        "location",
        "Specific Location",
        &[
            ("nyc", "New York City", "New York City backdrop, urban NYC environment"),
            ("london", "London", "London setting, British urban environment"),
            ("paris", "Paris", "Parisian setting, French urban environment"),
            ("tokyo", "Tokyo", "Tokyo setting, Japanese urban environment"),
            ("forest", "Forest", "forest setting, trees and natural greenery"),
            ("mountain", "Mountain", "mountain landscape backdrop, elevated terrain"),
            ("desert", "Desert", "desert landscape, sandy terrain, warm tones"),
        ],
    ),
];

const STYLES: &[Row] = &[
    ("minimalist", "Minimalist", "minimalist aesthetic, clean and simple, less is more"),
    ("urban", "Urban / Street", "urban street style, gritty aesthetic, streetwear vibe"),
    ("luxury", "Luxury", "luxury aesthetic, premium feel, high-end presentation"),
    ("vintage", "Vintage", "vintage aesthetic, retro feel, nostalgic atmosphere"),
    ("modern", "Modern", "modern aesthetic, contemporary design, current trends"),
    ("organic", "Organic / Natural", "organic natural aesthetic, earthy tones, sustainable feel"),
    ("tech", "Tech / Futuristic", "tech aesthetic, futuristic feel, digital modern"),
    ("playful", "Playful / Fun", "playful aesthetic, fun and vibrant, youthful energy"),
    ("elegant", "Elegant", "elegant aesthetic, sophisticated and refined"),
    ("rustic", "Rustic", "rustic aesthetic, raw and authentic, handmade feel"),
];

const PALETTES: &[Row] = &[
    ("neutral", "Neutral", "neutral color palette, whites, grays, and blacks"),
    ("warm", "Warm Tones", "warm color palette, oranges, reds, and yellows"),
    ("cool", "Cool Tones", "cool color palette, blues, greens, and purples"),
    ("monochrome", "Monochrome", "monochromatic color scheme, single color variations"),
    ("vibrant", "Vibrant", "vibrant saturated colors, bold and eye-catching"),
    ("pastel", "Pastel", "soft pastel colors, muted and gentle tones"),
    ("earth", "Earth Tones", "earthy color palette, browns, greens, and tans"),
    ("neon", "Neon", "neon bright colors, fluorescent and electric"),
];

const DESIGN_MOVEMENTS: &[Row] = &[
    ("bauhaus", "Bauhaus", "Bauhaus design influence, geometric and functional"),
    ("memphis", "Memphis", "Memphis design style, bold patterns and colors"),
    ("swiss", "Swiss / International", "Swiss International style, grid-based and clean"),
    ("brutalist", "Brutalist", "brutalist design aesthetic, raw and bold"),
    ("art-deco", "Art Deco", "Art Deco style, geometric elegance and glamour"),
    ("scandinavian", "Scandinavian", "Scandinavian design, simple and functional"),
    ("japanese", "Japanese Minimal", "Japanese minimalist aesthetic, zen and balanced"),
];

const LIGHTING: &[(&str, &str, &[Row])] = &[
    (
        "natural",
        "Natural Light",
        &[
            ("golden-hour", "Golden Hour", "golden hour lighting, warm sunset glow"),
            ("overcast", "Overcast", "soft overcast diffused natural light"),
            ("bright-daylight", "Bright Daylight", "bright natural daylight, clear and vibrant"),
            ("blue-hour", "Blue Hour", "blue hour lighting, cool twilight tones"),
            ("dappled", "Dappled Light", "dappled sunlight through trees, natural patterns"),
        ],
    ),
    (
        "studio",
        "Studio Lighting",
        &[
            ("soft-box", "Soft Box", "soft box studio lighting, even and diffused"),
            ("dramatic", "Dramatic", "dramatic studio lighting, strong shadows and contrast"),
            ("high-key", "High Key", "high key lighting, bright and minimal shadows"),
            ("low-key", "Low Key", "low key lighting, dark with selective highlights"),
            ("rim-light", "Rim Light", "rim lighting, backlit edge definition"),
            ("beauty", "Beauty Light", "beauty dish lighting, flattering and smooth"),
        ],
    ),
    (
        "ambient",
        "Ambient Light",
        &[
            ("warm-ambient", "Warm Ambient", "warm ambient lighting, cozy interior glow"),
            ("cool-ambient", "Cool Ambient", "cool ambient lighting, modern and crisp"),
            ("neon", "Neon Glow", "neon lighting, colorful urban glow"),
            ("candlelit", "Candlelit", "candlelight ambiance, soft flickering warmth"),
            ("tungsten", "Tungsten", "tungsten indoor lighting, warm orange tones"),
            ("fluorescent", "Fluorescent", "fluorescent lighting, cool office environment"),
        ],
    ),
];

const CAMERA_ANGLES: &[Row] = &[
    ("front", "Front View", "front view, straight-on perspective"),
    ("three-quarter", "3/4 View", "three-quarter angle view, dynamic perspective"),
    ("side", "Side View", "side profile view, lateral perspective"),
    ("top-down", "Top Down", "top-down bird's eye view, overhead perspective"),
    ("eye-level", "Eye Level", "eye level perspective, natural viewpoint"),
    ("low-angle", "Low Angle", "low angle view, looking up at subject"),
    ("high-angle", "High Angle", "high angle view, looking down at subject"),
    ("dutch", "Dutch Angle", "dutch angle, tilted dynamic perspective"),
];

const CAMERA_DISTANCES: &[Row] = &[
    ("extreme-close", "Extreme Close-up", "extreme close-up, macro detail shot"),
    ("close-up", "Close-up", "close-up shot, detailed product view"),
    ("medium-close", "Medium Close", "medium close shot, product fills frame"),
    ("medium", "Medium", "medium shot, product with some context"),
    ("medium-wide", "Medium Wide", "medium wide shot, product in environment"),
    ("wide", "Wide Shot", "wide shot, full scene with product"),
    ("establishing", "Establishing", "establishing shot, full context visible"),
];

const DEPTHS_OF_FIELD: &[Row] = &[
    ("shallow", "Shallow (Bokeh)", "shallow depth of field, blurred background, bokeh effect"),
    ("medium", "Medium", "medium depth of field, some background blur"),
    ("deep", "Deep (Sharp)", "deep depth of field, everything in focus, sharp throughout"),
];

const PLANTS: &[Row] = &[
    ("monstera", "Monstera", "monstera plant, large tropical leaves"),
    ("palm", "Palm Tree", "indoor palm tree, tropical vibe"),
    ("fern", "Fern", "lush green fern plant"),
    ("succulent", "Succulent", "small succulent plant in pot"),
    ("fiddle", "Fiddle Leaf", "fiddle leaf fig tree, tall indoor plant"),
    ("snake", "Snake Plant", "snake plant (sansevieria), modern vertical leaves"),
    ("flowers", "Fresh Flowers", "vase of fresh flowers, colorful and vibrant"),
    ("dried", "Dried Flowers", "arrangement of dried flowers, pampas grass, boho style"),
    ("bonsai", "Bonsai", "bonsai tree, artistic and zen"),
    ("cactus", "Cactus", "cactus plant, desert vibe"),
];

const TEXTURES: &[Row] = &[
    ("leather", "Leather", "leather texture, premium and detailed"),
    ("wood", "Wood", "natural wood texture, grain details"),
    ("marble", "Marble", "marble material, elegant veining, smooth surface"),
    ("concrete", "Concrete", "concrete texture, industrial and raw gray"),
    ("fabric", "Fabric/Textile", "fabric texture, woven textile detail"),
    ("metal", "Metal", "metallic texture, brushed or polished finish"),
    ("glass", "Glass", "glass material, transparent and reflective"),
    ("plastic", "Plastic", "plastic material, smooth synthetic surface"),
    ("stone", "Stone", "natural stone texture, rough and organic"),
    ("ceramic", "Ceramic", "ceramic material, smooth glazed finish"),
];

type ProductRow = (&'static str, &'static [&'static str], &'static str);

const PRODUCTS: &[(&str, &str, &[ProductRow])] = &[
    (
        "Apparel & Bags",
        "Clothing, wearables, and bag mockups",
        &[
            (
                "T-Shirt",
                &["casual", "cotton", "crew neck"],
                "cotton t-shirt with realistic fabric texture and natural draping",
            ),
            (
                "Hoodie",
                &["casual", "warm", "streetwear"],
                "hoodie sweatshirt with soft fabric texture and relaxed fit",
            ),
            (
                "Cap",
                &["headwear", "baseball", "snapback"],
                "baseball cap with structured crown and curved brim",
            ),
            (
                "Tote Bag",
                &["bag", "canvas", "shopping"],
                "canvas tote bag with sturdy handles and flat surface for branding",
            ),
            (
                "Leggings",
                &["athletic", "yoga", "fitness"],
                "athletic leggings with stretchy fabric and seamless design",
            ),
            (
                "Socks",
                &["footwear", "athletic", "crew"],
                "crew socks with ribbed cuff and comfortable fit",
            ),
            (
                "Tank Top",
                &["sleeveless", "athletic", "summer"],
                "tank top with scoop neck and relaxed fit",
            ),
            (
                "Polo Shirt",
                &["collar", "business casual", "golf"],
                "polo shirt with collar and buttoned placket",
            ),
            (
                "Jacket",
                &["outerwear", "layering", "casual"],
                "jacket with zipper front and comfortable fit",
            ),
            (
                "Backpack",
                &["bag", "carry", "travel"],
                "backpack with padded straps and multiple compartments",
            ),
        ],
    ),
    (
        "Devices",
        "Tech device mockups including phones, laptops, tablets",
        &[
            (
                "iPhone Pro",
                &["smartphone", "apple", "mobile"],
                "iPhone Pro with edge-to-edge display and realistic screen reflections",
            ),
            (
                "iPhone Max",
                &["smartphone", "apple", "large display"],
                "iPhone Pro Max with large display and premium finish",
            ),
            (
                "iPhone mini",
                &["smartphone", "apple", "compact"],
                "iPhone mini with compact form factor",
            ),
            (
                "MacBook Pro 13\"",
                &["laptop", "apple", "portable"],
                "MacBook Pro 13-inch with retina display and aluminum body",
            ),
            (
                "MacBook Pro 15\"",
                &["laptop", "apple", "professional"],
                "MacBook Pro 15-inch with large display and slim profile",
            ),
            (
                "MacBook Pro 16\"",
                &["laptop", "apple", "workstation"],
                "MacBook Pro 16-inch with immersive display and powerful design",
            ),
            (
                "iPad Pro",
                &["tablet", "apple", "creative"],
                "iPad Pro with edge-to-edge liquid retina display",
            ),
            (
                "Apple Watch",
                &["smartwatch", "wearable", "fitness"],
                "Apple Watch with always-on display and premium band",
            ),
            (
                "Studio Display",
                &["monitor", "apple", "professional"],
                "Apple Studio Display with 5K retina screen and aluminum stand",
            ),
            (
                "iMac",
                &["desktop", "apple", "all-in-one"],
                "iMac with colorful design and slim profile",
            ),
        ],
    ),
    (
        "Packaging",
        "Product packaging and container mockups",
        &[
            (
                "Box",
                &["cardboard", "shipping", "product"],
                "product box with clean edges and matte finish",
            ),
            (
                "Bottle",
                &["container", "liquid", "beverage"],
                "bottle with smooth surface and clear label area",
            ),
            (
                "Pouch",
                &["flexible", "food", "resealable"],
                "stand-up pouch with zipper closure and flat label area",
            ),
            (
                "Jar",
                &["glass", "container", "cosmetic"],
                "jar with lid and clean label surface",
            ),
            (
                "Can",
                &["metal", "beverage", "food"],
                "aluminum can with 360-degree label wrap",
            ),
            (
                "Paper Bag",
                &["kraft", "shopping", "retail"],
                "paper shopping bag with twisted handles",
            ),
            (
                "Tube",
                &["squeeze", "cosmetic", "cream"],
                "tube packaging with flip-top cap",
            ),
            (
                "Carton",
                &["milk", "juice", "beverage"],
                "beverage carton with gable top design",
            ),
        ],
    ),
    (
        "Print Materials",
        "Printed marketing and stationery mockups",
        &[
            (
                "Poster",
                &["wall", "art", "advertising"],
                "poster with high-quality paper and smooth surface",
            ),
            (
                "Business Card",
                &["card", "professional", "networking"],
                "business card with premium cardstock and clean edges",
            ),
            (
                "Magazine",
                &["publication", "editorial", "glossy"],
                "magazine with glossy cover and realistic page thickness",
            ),
            (
                "Book",
                &["hardcover", "publication", "reading"],
                "book with spine and realistic page edges",
            ),
            (
                "Flyer",
                &["handout", "promotional", "single page"],
                "flyer on premium paper with vibrant print quality",
            ),
            (
                "Letterhead",
                &["stationery", "corporate", "document"],
                "letterhead on quality paper with professional finish",
            ),
            (
                "Brochure",
                &["folded", "marketing", "informational"],
                "tri-fold brochure with crisp folds and glossy finish",
            ),
            (
                "Menu",
                &["restaurant", "food", "hospitality"],
                "menu with elegant typography and quality paper",
            ),
        ],
    ),
    (
        "Out of Home",
        "Billboard, signage, and outdoor advertising mockups",
        &[
            (
                "Billboard",
                &["outdoor", "large format", "advertising"],
                "large billboard with realistic urban context",
            ),
            (
                "Urban Poster",
                &["street", "wheatpaste", "guerilla"],
                "street poster on urban wall with authentic texture",
            ),
            (
                "Storefront",
                &["retail", "shop", "window"],
                "storefront with window display and signage area",
            ),
            (
                "Sign",
                &["wayfinding", "directional", "mounted"],
                "mounted sign with clean surface and realistic mounting",
            ),
            (
                "A-Frame",
                &["sidewalk", "sandwich board", "portable"],
                "A-frame sidewalk sign with chalkboard or poster surface",
            ),
            (
                "Bus Shelter",
                &["transit", "outdoor", "advertising"],
                "bus shelter advertising panel with backlit display",
            ),
            (
                "Banner",
                &["hanging", "fabric", "promotional"],
                "hanging banner with fabric texture and grommets",
            ),
        ],
    ),
    (
        "Stationery",
        "Office and personal stationery mockups",
        &[
            (
                "Pencil",
                &["writing", "wood", "office"],
                "wooden pencil with eraser and natural finish",
            ),
            (
                "Notebook",
                &["writing", "journal", "pages"],
                "notebook with quality cover and lined pages",
            ),
            (
                "Envelope",
                &["mail", "correspondence", "paper"],
                "envelope with clean surface and proper proportions",
            ),
            (
                "Greeting Card",
                &["card", "folded", "celebration"],
                "folded greeting card with quality cardstock",
            ),
            (
                "Tape",
                &["washi", "decorative", "adhesive"],
                "decorative tape roll with pattern visible",
            ),
            (
                "Pen",
                &["writing", "ballpoint", "office"],
                "pen with sleek design and clip detail",
            ),
            (
                "Stamp",
                &["rubber", "ink", "marking"],
                "rubber stamp with wooden handle",
            ),
        ],
    ),
    (
        "Food & Beverage",
        "Food packaging and drinkware mockups",
        &[
            (
                "Coffee Cup",
                &["paper", "hot drink", "takeaway"],
                "paper coffee cup with lid and sleeve",
            ),
            (
                "Mug",
                &["ceramic", "hot drink", "handle"],
                "ceramic mug with comfortable handle",
            ),
            (
                "Water Bottle",
                &["reusable", "hydration", "sports"],
                "reusable water bottle with leak-proof cap",
            ),
            (
                "Beer Bottle",
                &["glass", "beverage", "alcohol"],
                "beer bottle with label area and realistic glass",
            ),
            (
                "Pizza Box",
                &["cardboard", "food", "delivery"],
                "pizza box with corrugated cardboard texture",
            ),
            (
                "Food Container",
                &["takeout", "meal prep", "storage"],
                "food container with clear lid and secure closure",
            ),
            (
                "Wine Bottle",
                &["glass", "beverage", "elegant"],
                "wine bottle with elegant label and cork",
            ),
            (
                "Tumbler",
                &["insulated", "drink", "travel"],
                "insulated tumbler with lid and straw",
            ),
        ],
    ),
    (
        "Beauty & Personal",
        "Cosmetic and personal care product mockups",
        &[
            (
                "Candle",
                &["wax", "scented", "home"],
                "candle in glass jar with cotton wick",
            ),
            (
                "Diffuser",
                &["scent", "aromatherapy", "home"],
                "reed diffuser with glass bottle and sticks",
            ),
            (
                "Cream Tube",
                &["cosmetic", "skincare", "squeeze"],
                "cosmetic cream tube with flip-top cap",
            ),
            (
                "Spray Bottle",
                &["mist", "perfume", "cosmetic"],
                "spray bottle with fine mist nozzle",
            ),
            (
                "Serum Bottle",
                &["dropper", "skincare", "glass"],
                "serum bottle with dropper and amber glass",
            ),
            (
                "Lipstick",
                &["makeup", "cosmetic", "color"],
                "lipstick tube with bullet and cap",
            ),
            (
                "Compact Mirror",
                &["makeup", "portable", "beauty"],
                "compact mirror with powder compartment",
            ),
            (
                "Soap Bar",
                &["bath", "natural", "cleansing"],
                "bar soap with natural texture and packaging",
            ),
        ],
    ),
    (
        "Hospitality",
        "Restaurant and hotel industry mockups",
        &[
            (
                "Menu",
                &["restaurant", "food", "dining"],
                "restaurant menu with elegant typography",
            ),
            (
                "Coaster",
                &["drink", "bar", "protective"],
                "drink coaster with absorbent surface",
            ),
            (
                "Napkin",
                &["dining", "paper", "cloth"],
                "folded napkin with quality texture",
            ),
            (
                "Towel",
                &["bath", "hotel", "soft"],
                "folded towel with soft cotton texture",
            ),
            (
                "Apron",
                &["kitchen", "chef", "service"],
                "apron with adjustable straps and front pocket",
            ),
            (
                "Placemat",
                &["dining", "table", "setting"],
                "placemat with clean surface and quality material",
            ),
            (
                "Table Tent",
                &["tabletop", "advertising", "restaurant"],
                "table tent card with sturdy fold",
            ),
        ],
    ),
    (
        "Miscellaneous",
        "Various other product mockups",
        &[
            (
                "Lighter",
                &["flame", "promotional", "pocket"],
                "disposable lighter with wraparound label",
            ),
            (
                "Matches",
                &["fire", "promotional", "box"],
                "matchbox with striking surface and printed cover",
            ),
            (
                "Keycard",
                &["hotel", "access", "plastic"],
                "hotel keycard with magnetic stripe",
            ),
            (
                "Badge",
                &["ID", "lanyard", "identification"],
                "ID badge with lanyard and clear holder",
            ),
            (
                "Hard Hat",
                &["safety", "construction", "protective"],
                "safety hard hat with suspension system",
            ),
            (
                "Door Hanger",
                &["do not disturb", "hotel", "hanging"],
                "door hanger with die-cut handle opening",
            ),
            (
                "USB Drive",
                &["storage", "promotional", "tech"],
                "USB flash drive with branded surface",
            ),
            (
                "Phone Case",
                &["protective", "accessory", "mobile"],
                "phone case with smooth surface and precise cutouts",
            ),
        ],
    ),
];

fn rows(rows: &[Row]) -> Vec<PresetEntry> {
    rows.iter()
        .map(|(id, label, prompt)| PresetEntry::new(id, label, prompt))
        .collect()
}

fn groups(groups: &[(&str, &str, &[Row])]) -> Vec<PresetGroup> {
    groups
        .iter()
        .map(|(id, label, options)| PresetGroup {
            id: id.to_string(),
            label: label.to_string(),
            options: rows(options),
        })
        .collect()
}

fn products() -> Vec<ProductCategory> {
    PRODUCTS
        .iter()
        .map(|(name, description, products)| ProductCategory {
            name: name.to_string(),
            description: description.to_string(),
            products: products
                .iter()
                .map(|(name, keywords, prompt)| ProductEntry {
                    name: name.to_string(),
                    keywords: keywords.iter().map(|k| k.to_string()).collect(),
                    default_prompt: prompt.to_string(),
                })
                .collect(),
        })
        .collect()
}

pub(super) fn catalog() -> PresetCatalog {
    PresetCatalog {
        products: products(),
        scenes: groups(SCENES),
        styles: rows(STYLES),
        palettes: rows(PALETTES),
        design_movements: rows(DESIGN_MOVEMENTS),
        lighting: groups(LIGHTING),
        camera_angles: rows(CAMERA_ANGLES),
        camera_distances: rows(CAMERA_DISTANCES),
        depths_of_field: rows(DEPTHS_OF_FIELD),
        plants: rows(PLANTS),
        textures: rows(TEXTURES),
    }
}
