//! Builtin shortcode table
//!
//! Maps shortcode names (stored without the surrounding `:` delimiters)
//! to emoji glyph strings. The resolver matches names after stripping
//! case, `_`, and `-`, so aliases only need to be listed when they differ
//! by more than punctuation.

/// Builtin shortcode-name to glyph table.
///
/// Scanned in order; names are unique so order is unobservable.
pub const BUILTIN: &[(&str, &str)] = &[
    // Smileys
    ("grinning", "😀"),
    ("smiley", "😃"),
    ("smile", "😄"),
    ("grin", "😁"),
    ("laughing", "😆"),
    ("sweat_smile", "😅"),
    ("rofl", "🤣"),
    ("joy", "😂"),
    ("slightly_smiling_face", "🙂"),
    ("upside_down_face", "🙃"),
    ("wink", "😉"),
    ("blush", "😊"),
    ("innocent", "😇"),
    ("heart_eyes", "😍"),
    ("star_struck", "🤩"),
    ("kissing_heart", "😘"),
    ("yum", "😋"),
    ("stuck_out_tongue", "😛"),
    ("stuck_out_tongue_winking_eye", "😜"),
    ("zany_face", "🤪"),
    ("money_mouth_face", "🤑"),
    ("hugs", "🤗"),
    ("shushing_face", "🤫"),
    ("thinking", "🤔"),
    ("zipper_mouth_face", "🤐"),
    ("neutral_face", "😐"),
    ("expressionless", "😑"),
    ("no_mouth", "😶"),
    ("smirk", "😏"),
    ("unamused", "😒"),
    ("roll_eyes", "🙄"),
    ("grimacing", "😬"),
    ("lying_face", "🤥"),
    ("relieved", "😌"),
    ("pensive", "😔"),
    ("sleepy", "😪"),
    ("drooling_face", "🤤"),
    ("sleeping", "😴"),
    ("mask", "😷"),
    ("face_with_thermometer", "🤒"),
    ("nauseated_face", "🤢"),
    ("sneezing_face", "🤧"),
    ("hot_face", "🥵"),
    ("cold_face", "🥶"),
    ("woozy_face", "🥴"),
    ("dizzy_face", "😵"),
    ("exploding_head", "🤯"),
    ("cowboy_hat_face", "🤠"),
    ("partying_face", "🥳"),
    ("sunglasses", "😎"),
    ("nerd_face", "🤓"),
    ("monocle_face", "🧐"),
    ("confused", "😕"),
    ("worried", "😟"),
    ("open_mouth", "😮"),
    ("astonished", "😲"),
    ("flushed", "😳"),
    ("pleading_face", "🥺"),
    ("fearful", "😨"),
    ("cold_sweat", "😰"),
    ("cry", "😢"),
    ("sob", "😭"),
    ("scream", "😱"),
    ("confounded", "😖"),
    ("persevere", "😣"),
    ("disappointed", "😞"),
    ("sweat", "😓"),
    ("weary", "😩"),
    ("tired_face", "😫"),
    ("yawning_face", "🥱"),
    ("triumph", "😤"),
    ("rage", "😡"),
    ("angry", "😠"),
    ("smiling_imp", "😈"),
    ("imp", "👿"),
    ("skull", "💀"),
    ("poop", "💩"),
    ("clown_face", "🤡"),
    ("ghost", "👻"),
    ("alien", "👽"),
    ("robot", "🤖"),
    // Gestures and hands
    ("wave", "👋"),
    ("raised_hand", "✋"),
    ("vulcan_salute", "🖖"),
    ("ok_hand", "👌"),
    ("crossed_fingers", "🤞"),
    ("metal", "🤘"),
    ("call_me_hand", "🤙"),
    ("point_left", "👈"),
    ("point_right", "👉"),
    ("point_down", "👇"),
    ("middle_finger", "🖕"),
    ("+1", "👍"),
    ("thumbsup", "👍"),
    ("-1", "👎"),
    ("thumbsdown", "👎"),
    ("fist", "✊"),
    ("facepunch", "👊"),
    ("punch", "👊"),
    ("clap", "👏"),
    ("raised_hands", "🙌"),
    ("open_hands", "👐"),
    ("handshake", "🤝"),
    ("pray", "🙏"),
    ("nail_care", "💅"),
    ("muscle", "💪"),
    ("selfie", "🤳"),
    // Hearts
    ("heart", "❤️"),
    ("orange_heart", "🧡"),
    ("yellow_heart", "💛"),
    ("green_heart", "💚"),
    ("blue_heart", "💙"),
    ("purple_heart", "💜"),
    ("black_heart", "🖤"),
    ("white_heart", "🤍"),
    ("broken_heart", "💔"),
    ("two_hearts", "💕"),
    ("sparkling_heart", "💖"),
    ("heartpulse", "💗"),
    ("heartbeat", "💓"),
    ("revolving_hearts", "💞"),
    ("cupid", "💘"),
    ("gift_heart", "💝"),
    // Symbols and objects
    ("fire", "🔥"),
    ("star", "⭐"),
    ("star2", "🌟"),
    ("sparkles", "✨"),
    ("zap", "⚡"),
    ("boom", "💥"),
    ("dizzy", "💫"),
    ("sweat_drops", "💦"),
    ("dash", "💨"),
    ("100", "💯"),
    ("tada", "🎉"),
    ("confetti_ball", "🎊"),
    ("balloon", "🎈"),
    ("gift", "🎁"),
    ("trophy", "🏆"),
    ("crown", "👑"),
    ("gem", "💎"),
    ("bell", "🔔"),
    ("mega", "📣"),
    ("loudspeaker", "📢"),
    ("bulb", "💡"),
    ("book", "📖"),
    ("books", "📚"),
    ("memo", "📝"),
    ("lock", "🔒"),
    ("unlock", "🔓"),
    ("key", "🔑"),
    ("hammer", "🔨"),
    ("wrench", "🔧"),
    ("link", "🔗"),
    ("package", "📦"),
    ("inbox_tray", "📥"),
    ("outbox_tray", "📤"),
    ("calendar", "📅"),
    ("chart_with_upwards_trend", "📈"),
    ("chart_with_downwards_trend", "📉"),
    ("clipboard", "📋"),
    ("pushpin", "📌"),
    ("paperclip", "📎"),
    ("mag", "🔍"),
    ("hourglass", "⌛"),
    ("watch", "⌚"),
    ("alarm_clock", "⏰"),
    ("computer", "💻"),
    ("iphone", "📱"),
    ("camera", "📷"),
    ("movie_camera", "🎥"),
    ("tv", "📺"),
    ("radio", "📻"),
    ("microphone", "🎤"),
    ("headphones", "🎧"),
    ("musical_note", "🎵"),
    ("notes", "🎶"),
    ("guitar", "🎸"),
    ("trumpet", "🎺"),
    ("violin", "🎻"),
    ("drum", "🥁"),
    ("art", "🎨"),
    ("clapper", "🎬"),
    ("video_game", "🎮"),
    ("dart", "🎯"),
    ("game_die", "🎲"),
    ("jigsaw", "🧩"),
    ("soccer", "⚽"),
    ("basketball", "🏀"),
    ("football", "🏈"),
    ("baseball", "⚾"),
    ("tennis", "🎾"),
    ("8ball", "🎱"),
    ("checkered_flag", "🏁"),
    // Nature and animals
    ("dog", "🐶"),
    ("cat", "🐱"),
    ("mouse", "🐭"),
    ("hamster", "🐹"),
    ("rabbit", "🐰"),
    ("fox_face", "🦊"),
    ("bear", "🐻"),
    ("panda_face", "🐼"),
    ("koala", "🐨"),
    ("tiger", "🐯"),
    ("lion", "🦁"),
    ("cow", "🐮"),
    ("pig", "🐷"),
    ("frog", "🐸"),
    ("monkey_face", "🐵"),
    ("see_no_evil", "🙈"),
    ("hear_no_evil", "🙉"),
    ("speak_no_evil", "🙊"),
    ("chicken", "🐔"),
    ("penguin", "🐧"),
    ("bird", "🐦"),
    ("eagle", "🦅"),
    ("owl", "🦉"),
    ("bat", "🦇"),
    ("wolf", "🐺"),
    ("unicorn", "🦄"),
    ("bee", "🐝"),
    ("bug", "🐛"),
    ("butterfly", "🦋"),
    ("snail", "🐌"),
    ("turtle", "🐢"),
    ("snake", "🐍"),
    ("octopus", "🐙"),
    ("crab", "🦀"),
    ("tropical_fish", "🐠"),
    ("fish", "🐟"),
    ("dolphin", "🐬"),
    ("whale", "🐳"),
    ("shark", "🦈"),
    ("dragon", "🐉"),
    ("cactus", "🌵"),
    ("christmas_tree", "🎄"),
    ("evergreen_tree", "🌲"),
    ("palm_tree", "🌴"),
    ("seedling", "🌱"),
    ("herb", "🌿"),
    ("four_leaf_clover", "🍀"),
    ("maple_leaf", "🍁"),
    ("mushroom", "🍄"),
    ("rose", "🌹"),
    ("tulip", "🌷"),
    ("sunflower", "🌻"),
    ("cherry_blossom", "🌸"),
    ("bouquet", "💐"),
    ("sun_with_face", "🌞"),
    ("full_moon", "🌕"),
    ("crescent_moon", "🌙"),
    ("earth_americas", "🌎"),
    ("earth_africa", "🌍"),
    ("earth_asia", "🌏"),
    ("rainbow", "🌈"),
    ("snowman", "⛄"),
    ("umbrella", "☔"),
    ("droplet", "💧"),
    ("ocean", "🌊"),
    // Food and drink
    ("apple", "🍎"),
    ("green_apple", "🍏"),
    ("banana", "🍌"),
    ("watermelon", "🍉"),
    ("grapes", "🍇"),
    ("strawberry", "🍓"),
    ("cherries", "🍒"),
    ("peach", "🍑"),
    ("pineapple", "🍍"),
    ("coconut", "🥥"),
    ("kiwi_fruit", "🥝"),
    ("avocado", "🥑"),
    ("eggplant", "🍆"),
    ("potato", "🥔"),
    ("carrot", "🥕"),
    ("corn", "🌽"),
    ("cucumber", "🥒"),
    ("broccoli", "🥦"),
    ("bread", "🍞"),
    ("croissant", "🥐"),
    ("pretzel", "🥨"),
    ("cheese", "🧀"),
    ("egg", "🥚"),
    ("bacon", "🥓"),
    ("pancakes", "🥞"),
    ("fries", "🍟"),
    ("pizza", "🍕"),
    ("hamburger", "🍔"),
    ("hotdog", "🌭"),
    ("taco", "🌮"),
    ("burrito", "🌯"),
    ("ramen", "🍜"),
    ("spaghetti", "🍝"),
    ("sushi", "🍣"),
    ("bento", "🍱"),
    ("curry", "🍛"),
    ("rice", "🍚"),
    ("doughnut", "🍩"),
    ("cookie", "🍪"),
    ("cake", "🍰"),
    ("birthday", "🎂"),
    ("icecream", "🍦"),
    ("candy", "🍬"),
    ("lollipop", "🍭"),
    ("chocolate_bar", "🍫"),
    ("popcorn", "🍿"),
    ("coffee", "☕"),
    ("tea", "🍵"),
    ("beer", "🍺"),
    ("beers", "🍻"),
    ("wine_glass", "🍷"),
    ("cocktail", "🍸"),
    ("tropical_drink", "🍹"),
    ("champagne", "🍾"),
    ("milk_glass", "🥛"),
    // Travel and places
    ("rocket", "🚀"),
    ("car", "🚗"),
    ("red_car", "🚗"),
    ("taxi", "🚕"),
    ("bus", "🚌"),
    ("train", "🚆"),
    ("metro", "🚇"),
    ("ship", "🚢"),
    ("sailboat", "⛵"),
    ("anchor", "⚓"),
    ("bike", "🚲"),
    ("fire_engine", "🚒"),
    ("police_car", "🚓"),
    ("ambulance", "🚑"),
    ("tractor", "🚜"),
    ("house", "🏠"),
    ("office", "🏢"),
    ("hospital", "🏥"),
    ("bank", "🏦"),
    ("hotel", "🏨"),
    ("school", "🏫"),
    ("factory", "🏭"),
    ("castle", "🏰"),
    ("tent", "⛺"),
    ("volcano", "🌋"),
    ("mount_fuji", "🗻"),
    ("statue_of_liberty", "🗽"),
    ("compass", "🧭"),
    // People and composites
    ("santa", "🎅"),
    ("family", "👪"),
    ("couple", "👫"),
    ("dancer", "💃"),
    ("man_dancing", "🕺"),
    ("walking", "🚶"),
    ("runner", "🏃"),
    ("technologist", "🧑‍💻"),
    ("rainbow_flag", "🏳️‍🌈"),
    ("pirate_flag", "🏴‍☠️"),
    // Flags
    ("us", "🇺🇸"),
    ("uk", "🇬🇧"),
    ("gb", "🇬🇧"),
    ("jp", "🇯🇵"),
    ("fr", "🇫🇷"),
    ("de", "🇩🇪"),
    ("it", "🇮🇹"),
    ("es", "🇪🇸"),
    ("kr", "🇰🇷"),
    ("cn", "🇨🇳"),
    ("ru", "🇷🇺"),
    ("br", "🇧🇷"),
    ("ca", "🇨🇦"),
    ("in", "🇮🇳"),
    ("au", "🇦🇺"),
    ("mx", "🇲🇽"),
    ("eu", "🇪🇺"),
    // Misc symbols
    ("warning", "⚠️"),
    ("no_entry", "⛔"),
    ("white_check_mark", "✅"),
    ("x", "❌"),
    ("question", "❓"),
    ("exclamation", "❗"),
    ("heavy_plus_sign", "➕"),
    ("heavy_minus_sign", "➖"),
    ("heavy_division_sign", "➗"),
    ("curly_loop", "➰"),
];
