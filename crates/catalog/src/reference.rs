//! Fixed reference lists of valid cities and category tags.
//!
//! These populate selection affordances only. Submitted tags and cities are
//! never checked against them by the orchestrator; the service decides what
//! it can match.

/// City names the service has restaurants for
pub const CITIES: &[&str] = &[
    "Glendale Az", "Gilbert", "Phoenix", "Goodyear", "Scottsdale", "Gila Bend", "Mesa",
    "Glendale", "Tempe", "Queen Creek", "Surprise", "Casa Grande", "Chandler",
    "Apache Junction", "Cave Creek", "Buckeye", "Litchfield Park", "Maricopa", "Peoria",
    "Wickenburg", "Avondale", "El Mirage", "Florence", "Tolleson", "Paradise Valley",
    "Guadalupe", "Fountain Hills", "Sun City West", "Anthem", "Ahwatukee", "Sun City",
    "Gold Canyon", "Fort McDowell", "Laveen", "Sun Lakes", "Coolidge", "San Tan Valley",
    "Fountain Hls", "Higley", "Carefree", "Grand Junction", "Tonopah", "Good Year",
    "Saguaro Lake",
];

/// Category tags known to the service, lowercase
pub const CATEGORIES: &[&str] = &[
    "afghan", "african", "american", "asian", "bagels", "bakeries",
    "breakfast & brunch", "british", "buffets", "burgers", "cafes", "cajun/creole",
    "cambodian", "candy", "caribbean", "cheese", "cheesesteaks", "chicken wings",
    "chinese", "chocolatiers & shops", "coffee & tea", "comfort food", "creperies",
    "cuban", "delis", "desserts", "diners", "do-it-yourself food", "donuts",
    "ethiopian", "ethnic food", "fast food", "festivals", "filipino", "fish & chips",
    "fondue", "food", "food stands", "food trucks", "french", "fruits & veggies",
    "gelato", "german", "gluten-free", "greek", "grocery", "halal", "hawaiian",
    "ice cream & frozen yogurt", "indian", "irish", "italian", "japanese", "korean",
    "kosher", "laotian", "latin american", "lebanese", "live/raw food", "local flavor",
    "mediterranean", "mexican", "middle eastern", "mongolian", "pakistani",
    "persian/iranian", "peruvian", "pizza", "polish", "restaurants", "russian", "salad",
    "sandwiches", "scandinavian", "seafood", "shaved ice", "soul food", "soup",
    "southern", "spanish", "specialty food", "steakhouses", "street vendors",
    "taiwanese", "tea rooms", "tex-mex", "thai", "turkish", "vegan", "vegetarian",
    "vietnamese",
];
