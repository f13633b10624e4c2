// Generated body outline path data.
//
// Coordinates live in the shared `0 0 200 400` body view box (see `crate::paths::view_box`).
// Parts are listed in draw order: a parent shape always precedes the sub-group shapes nested
// inside it, so the last containing shape is the topmost one.
//
// `paths::tests` checks that every entry parses and that ordinary sub-groups stay inside the
// bounds of their parents.

use crate::body::{BodyPart, BodySlug};

pub static MALE_FRONT: &[BodyPart] = &[
    BodyPart {
        slug: BodySlug::Head,
        common: &[
            "M87 22 C87 12.6 92.8 5 100 5 C107.2 5 113 12.6 113 22 C113 31.4 107.2 39 100 39 C92.8 39 87 31.4 87 22 Z",
        ],
        left: &[],
        right: &[],
    },
    BodyPart {
        slug: BodySlug::Hair,
        common: &["M86 16 L89 7 L100 3 L111 7 L114 16 L108 11 L100 9 L92 11 Z"],
        left: &[],
        right: &[],
    },
    BodyPart {
        slug: BodySlug::Neck,
        common: &["M92 36 L108 36 L110 50 L90 50 Z"],
        left: &[],
        right: &[],
    },
    BodyPart {
        slug: BodySlug::Trapezius,
        common: &[],
        left: &["M109 42 L130 51 L127 57 L110 55 Z"],
        right: &["M91 42 L70 51 L73 57 L90 55 Z"],
    },
    BodyPart {
        slug: BodySlug::UpperTrapezius,
        common: &[],
        left: &["M112 46 L124 51 L122 54 L112 53 Z"],
        right: &["M88 46 L76 51 L78 54 L88 53 Z"],
    },
    BodyPart {
        slug: BodySlug::Deltoids,
        common: &[],
        left: &["M129 52 L141 54 L148 64 L149 82 L138 80 L132 68 L128 58 Z"],
        right: &["M71 52 L59 54 L52 64 L51 82 L62 80 L68 68 L72 58 Z"],
    },
    BodyPart {
        slug: BodySlug::FrontDeltoid,
        common: &[],
        left: &["M132 58 L141 58 L146 66 L146 77 L139 76 L134 67 Z"],
        right: &["M68 58 L59 58 L54 66 L54 77 L61 76 L66 67 Z"],
    },
    BodyPart {
        slug: BodySlug::Chest,
        common: &[],
        left: &["M101 56 L127 56 L131 68 L126 84 L112 88 L101 86 Z"],
        right: &["M99 56 L73 56 L69 68 L74 84 L88 88 L99 86 Z"],
    },
    BodyPart {
        slug: BodySlug::UpperChest,
        common: &[],
        left: &["M103 58 L125 58 L128 68 L103 69 Z"],
        right: &["M97 58 L75 58 L72 68 L97 69 Z"],
    },
    BodyPart {
        slug: BodySlug::LowerChest,
        common: &[],
        left: &["M103 72 L127 72 L124 82 L112 85 L103 84 Z"],
        right: &["M97 72 L73 72 L76 82 L88 85 L97 84 Z"],
    },
    BodyPart {
        slug: BodySlug::Biceps,
        common: &[],
        left: &["M134 83 L146 84 L149 100 L146 118 L137 118 L133 100 Z"],
        right: &["M66 83 L54 84 L51 100 L54 118 L63 118 L67 100 Z"],
    },
    BodyPart {
        slug: BodySlug::Forearm,
        common: &[],
        left: &["M138 122 L148 121 L156 140 L158 168 L150 170 L141 146 Z"],
        right: &["M62 122 L52 121 L44 140 L42 168 L50 170 L59 146 Z"],
    },
    BodyPart {
        slug: BodySlug::Hands,
        common: &[],
        left: &["M150 174 L160 173 L166 186 L162 198 L153 197 L149 186 Z"],
        right: &["M50 174 L40 173 L34 186 L38 198 L47 197 L51 186 Z"],
    },
    BodyPart {
        slug: BodySlug::Abs,
        common: &["M89 90 L111 90 L112 120 L110 150 L100 156 L90 150 L88 120 Z"],
        left: &[],
        right: &[],
    },
    BodyPart {
        slug: BodySlug::UpperAbs,
        common: &["M91 92 L109 92 L110 117 L90 117 Z"],
        left: &[],
        right: &[],
    },
    BodyPart {
        slug: BodySlug::LowerAbs,
        common: &["M90 121 L110 121 L108 148 L100 153 L92 148 Z"],
        left: &[],
        right: &[],
    },
    BodyPart {
        slug: BodySlug::Obliques,
        common: &[],
        left: &["M113 90 L125 88 L127 110 L124 140 L113 148 L113 120 Z"],
        right: &["M87 90 L75 88 L73 110 L76 140 L87 148 L87 120 Z"],
    },
    BodyPart {
        slug: BodySlug::Serratus,
        common: &[],
        left: &["M115 92 L124 91 L125 104 L115 106 Z"],
        right: &["M85 92 L76 91 L75 104 L85 106 Z"],
    },
    BodyPart {
        slug: BodySlug::Adductors,
        common: &[],
        left: &["M101 158 L108 160 L108 210 L104 206 L101 190 Z"],
        right: &["M99 158 L92 160 L92 210 L96 206 L99 190 Z"],
    },
    BodyPart {
        slug: BodySlug::Quadriceps,
        common: &[],
        left: &["M110 160 L128 156 L132 180 L130 220 L126 248 L114 248 L110 220 Z"],
        right: &["M90 160 L72 156 L68 180 L70 220 L74 248 L86 248 L90 220 Z"],
    },
    BodyPart {
        slug: BodySlug::HipFlexors,
        common: &[],
        left: &["M112 161 L126 158 L127 170 L112 171 Z"],
        right: &["M88 161 L74 158 L73 170 L88 171 Z"],
    },
    BodyPart {
        slug: BodySlug::InnerQuad,
        common: &[],
        left: &["M111 176 L119 176 L119 240 L114 244 L111 225 Z"],
        right: &["M89 176 L81 176 L81 240 L86 244 L89 225 Z"],
    },
    BodyPart {
        slug: BodySlug::OuterQuad,
        common: &[],
        left: &["M121 176 L128 175 L129 215 L125 242 L121 242 Z"],
        right: &["M79 176 L72 175 L71 215 L75 242 L79 242 Z"],
    },
    BodyPart {
        slug: BodySlug::Knees,
        common: &[],
        left: &["M113 252 L127 252 L128 266 L112 266 Z"],
        right: &["M87 252 L73 252 L72 266 L88 266 Z"],
    },
    BodyPart {
        slug: BodySlug::Tibialis,
        common: &[],
        left: &["M113 270 L121 270 L121 328 L115 328 Z"],
        right: &["M87 270 L79 270 L79 328 L85 328 Z"],
    },
    BodyPart {
        slug: BodySlug::Calves,
        common: &[],
        left: &["M122 272 L129 270 L131 300 L126 326 L122 326 Z"],
        right: &["M78 272 L71 270 L69 300 L74 326 L78 326 Z"],
    },
    BodyPart {
        slug: BodySlug::Feet,
        common: &[],
        left: &["M110 334 L128 334 L134 358 L112 362 L108 350 Z"],
        right: &["M90 334 L72 334 L66 358 L88 362 L92 350 Z"],
    },
    BodyPart {
        slug: BodySlug::Ankles,
        common: &[],
        left: &["M112 334 L126 334 L127 344 L111 344 Z"],
        right: &["M88 334 L74 334 L73 344 L89 344 Z"],
    },
];

pub static MALE_BACK: &[BodyPart] = &[
    BodyPart {
        slug: BodySlug::Head,
        common: &[
            "M87 22 C87 12.6 92.8 5 100 5 C107.2 5 113 12.6 113 22 C113 31.4 107.2 39 100 39 C92.8 39 87 31.4 87 22 Z",
        ],
        left: &[],
        right: &[],
    },
    BodyPart {
        slug: BodySlug::Hair,
        common: &["M86 18 L88 8 L100 3 L112 8 L114 18 L100 14 Z"],
        left: &[],
        right: &[],
    },
    BodyPart {
        slug: BodySlug::Neck,
        common: &["M92 36 L108 36 L110 48 L90 48 Z"],
        left: &[],
        right: &[],
    },
    BodyPart {
        slug: BodySlug::Trapezius,
        common: &[
            "M100 40 L112 46 L132 53 L114 70 L104 98 L100 104 L96 98 L86 70 L68 53 L88 46 Z",
        ],
        left: &[],
        right: &[],
    },
    BodyPart {
        slug: BodySlug::Deltoids,
        common: &[],
        left: &["M70 54 L58 56 L51 66 L51 82 L61 80 L67 68 Z"],
        right: &["M130 54 L142 56 L149 66 L149 82 L139 80 L133 68 Z"],
    },
    BodyPart {
        slug: BodySlug::RotatorCuff,
        common: &[],
        left: &["M84 64 L70 58 L66 70 L78 80 L85 74 Z"],
        right: &["M116 64 L130 58 L134 70 L122 80 L115 74 Z"],
    },
    BodyPart {
        slug: BodySlug::Rhomboids,
        common: &[],
        left: &["M99 66 L90 66 L94 92 L99 96 Z"],
        right: &["M101 66 L110 66 L106 92 L101 96 Z"],
    },
    BodyPart {
        slug: BodySlug::UpperBack,
        common: &[],
        left: &["M89 76 L74 80 L69 96 L74 120 L90 124 L93 100 Z"],
        right: &["M111 76 L126 80 L131 96 L126 120 L110 124 L107 100 Z"],
    },
    BodyPart {
        slug: BodySlug::Triceps,
        common: &[],
        left: &["M66 84 L53 84 L51 102 L55 120 L63 120 L67 100 Z"],
        right: &["M134 84 L147 84 L149 102 L145 120 L137 120 L133 100 Z"],
    },
    BodyPart {
        slug: BodySlug::Forearm,
        common: &[],
        left: &["M62 122 L52 121 L44 140 L42 168 L50 170 L59 146 Z"],
        right: &["M138 122 L148 121 L156 140 L158 168 L150 170 L141 146 Z"],
    },
    BodyPart {
        slug: BodySlug::Hands,
        common: &[],
        left: &["M50 174 L40 173 L34 186 L38 198 L47 197 L51 186 Z"],
        right: &["M150 174 L160 173 L166 186 L162 198 L153 197 L149 186 Z"],
    },
    BodyPart {
        slug: BodySlug::LowerBack,
        common: &["M90 126 L110 126 L112 150 L100 154 L88 150 Z"],
        left: &[],
        right: &[],
    },
    BodyPart {
        slug: BodySlug::Gluteal,
        common: &[],
        left: &["M99 156 L76 152 L68 170 L72 188 L90 190 L99 184 Z"],
        right: &["M101 156 L124 152 L132 170 L128 188 L110 190 L101 184 Z"],
    },
    BodyPart {
        slug: BodySlug::Hamstring,
        common: &[],
        left: &["M98 194 L72 192 L69 220 L74 250 L88 250 L96 230 Z"],
        right: &["M102 194 L128 192 L131 220 L126 250 L112 250 L104 230 Z"],
    },
    BodyPart {
        slug: BodySlug::Adductors,
        common: &[],
        left: &["M97 196 L91 196 L91 232 L95 228 Z"],
        right: &["M103 196 L109 196 L109 232 L105 228 Z"],
    },
    BodyPart {
        slug: BodySlug::Calves,
        common: &[],
        left: &["M90 262 L72 260 L68 290 L74 326 L86 326 L92 290 Z"],
        right: &["M110 262 L128 260 L132 290 L126 326 L114 326 L108 290 Z"],
    },
    BodyPart {
        slug: BodySlug::Feet,
        common: &[],
        left: &["M89 330 L72 330 L70 352 L90 352 Z"],
        right: &["M111 330 L128 330 L130 352 L110 352 Z"],
    },
    BodyPart {
        slug: BodySlug::Ankles,
        common: &[],
        left: &["M87 330 L74 330 L74 340 L87 340 Z"],
        right: &["M113 330 L126 330 L126 340 L113 340 Z"],
    },
];

pub static FEMALE_FRONT: &[BodyPart] = &[
    BodyPart {
        slug: BodySlug::Head,
        common: &[
            "M88.3 22 C88.3 12.6 93.5 5 100 5 C106.5 5 111.7 12.6 111.7 22 C111.7 31.4 106.5 39 100 39 C93.5 39 88.3 31.4 88.3 22 Z",
        ],
        left: &[],
        right: &[],
    },
    BodyPart {
        slug: BodySlug::Hair,
        common: &[
            "M87.4 16 L90.1 7 L100 3 L109.9 7 L112.6 16 L107.2 11 L100 9 L92.8 11 Z",
        ],
        left: &[],
        right: &[],
    },
    BodyPart {
        slug: BodySlug::Neck,
        common: &["M92.8 36 L107.2 36 L109 50 L91 50 Z"],
        left: &[],
        right: &[],
    },
    BodyPart {
        slug: BodySlug::Trapezius,
        common: &[],
        left: &["M108.1 42 L127 51 L124.3 57 L109 55 Z"],
        right: &["M91.9 42 L73 51 L75.7 57 L91 55 Z"],
    },
    BodyPart {
        slug: BodySlug::Deltoids,
        common: &[],
        left: &[
            "M126.1 52 L136.9 54 L143.2 64 L144.1 82 L134.2 80 L128.8 68 L125.2 58 Z",
        ],
        right: &["M73.9 52 L63.1 54 L56.8 64 L55.9 82 L65.8 80 L71.2 68 L74.8 58 Z"],
    },
    BodyPart {
        slug: BodySlug::FrontDeltoid,
        common: &[],
        left: &["M128.8 58 L136.9 58 L141.4 66 L141.4 77 L135.1 76 L130.6 67 Z"],
        right: &["M71.2 58 L63.1 58 L58.6 66 L58.6 77 L64.9 76 L69.4 67 Z"],
    },
    BodyPart {
        slug: BodySlug::Chest,
        common: &[],
        left: &["M100.9 56 L124.3 56 L127.9 68 L123.4 84 L110.8 88 L100.9 86 Z"],
        right: &["M99.1 56 L75.7 56 L72.1 68 L76.6 84 L89.2 88 L99.1 86 Z"],
    },
    BodyPart {
        slug: BodySlug::UpperChest,
        common: &[],
        left: &["M102.7 58 L122.5 58 L125.2 68 L102.7 69 Z"],
        right: &["M97.3 58 L77.5 58 L74.8 68 L97.3 69 Z"],
    },
    BodyPart {
        slug: BodySlug::LowerChest,
        common: &[],
        left: &["M102.7 72 L124.3 72 L121.6 82 L110.8 85 L102.7 84 Z"],
        right: &["M97.3 72 L75.7 72 L78.4 82 L89.2 85 L97.3 84 Z"],
    },
    BodyPart {
        slug: BodySlug::Biceps,
        common: &[],
        left: &["M130.6 83 L141.4 84 L144.1 100 L143.1 118 L134.6 118 L129.7 100 Z"],
        right: &["M69.4 83 L58.6 84 L55.9 100 L56.9 118 L65.4 118 L70.3 100 Z"],
    },
    BodyPart {
        slug: BodySlug::Forearm,
        common: &[],
        left: &["M135.9 122 L145.2 121 L154.9 140 L160.1 168 L152 170 L140.7 146 Z"],
        right: &["M64.1 122 L54.8 121 L45.1 140 L39.9 168 L48 170 L59.3 146 Z"],
    },
    BodyPart {
        slug: BodySlug::Hands,
        common: &[],
        left: &["M152.4 174 L162.8 173 L170 186 L165.7 198 L156.2 197 L151.9 186 Z"],
        right: &["M47.6 174 L37.2 173 L30 186 L34.3 198 L43.8 197 L48.1 186 Z"],
    },
    BodyPart {
        slug: BodySlug::Abs,
        common: &["M90.1 90 L109.9 90 L111.3 120 L110 150 L100 156 L90 150 L88.7 120 Z"],
        left: &[],
        right: &[],
    },
    BodyPart {
        slug: BodySlug::UpperAbs,
        common: &["M91.9 92 L108.1 92 L109.3 117 L90.7 117 Z"],
        left: &[],
        right: &[],
    },
    BodyPart {
        slug: BodySlug::LowerAbs,
        common: &["M90.6 121 L109.4 121 L108 148 L100 153 L92 148 Z"],
        left: &[],
        right: &[],
    },
    BodyPart {
        slug: BodySlug::Obliques,
        common: &[],
        left: &["M111.7 90 L122.5 88 L124.8 110 L123.5 140 L112.9 148 L112.2 120 Z"],
        right: &["M88.3 90 L77.5 88 L75.2 110 L76.5 140 L87.1 148 L87.8 120 Z"],
    },
    BodyPart {
        slug: BodySlug::Serratus,
        common: &[],
        left: &["M113.5 92 L121.6 91 L122.7 104 L113.7 106 Z"],
        right: &["M86.5 92 L78.4 91 L77.3 104 L86.3 106 Z"],
    },
    BodyPart {
        slug: BodySlug::Adductors,
        common: &[],
        left: &["M101 158 L108.2 160 L108.5 210 L104.2 206 L101.1 190 Z"],
        right: &["M99 158 L91.8 160 L91.5 210 L95.8 206 L98.9 190 Z"],
    },
    BodyPart {
        slug: BodySlug::Quadriceps,
        common: &[],
        left: &[
            "M110.2 160 L128.3 156 L133.9 180 L131.8 220 L127.6 248 L114.8 248 L110.6 220 Z",
        ],
        right: &[
            "M89.8 160 L71.7 156 L66.1 180 L68.2 220 L72.4 248 L85.2 248 L89.4 220 Z",
        ],
    },
    BodyPart {
        slug: BodySlug::HipFlexors,
        common: &[],
        left: &["M112.3 161 L126.4 158 L128.1 170 L112.5 171 Z"],
        right: &["M87.7 161 L73.6 158 L71.9 170 L87.5 171 Z"],
    },
    BodyPart {
        slug: BodySlug::InnerQuad,
        common: &[],
        left: &["M111.6 176 L120 176 L120.1 240 L114.8 244 L111.7 225 Z"],
        right: &["M88.4 176 L80 176 L79.9 240 L85.2 244 L88.3 225 Z"],
    },
    BodyPart {
        slug: BodySlug::OuterQuad,
        common: &[],
        left: &["M122.1 176 L129.4 175 L130.7 215 L126.5 242 L122.3 242 Z"],
        right: &["M77.9 176 L70.6 175 L69.3 215 L73.5 242 L77.7 242 Z"],
    },
    BodyPart {
        slug: BodySlug::Knees,
        common: &[],
        left: &["M113.8 252 L128.6 252 L129.7 266 L112.7 266 Z"],
        right: &["M86.2 252 L71.4 252 L70.3 266 L87.3 266 Z"],
    },
    BodyPart {
        slug: BodySlug::Tibialis,
        common: &[],
        left: &["M113.8 270 L122.3 270 L122.3 328 L115.9 328 Z"],
        right: &["M86.2 270 L77.7 270 L77.7 328 L84.1 328 Z"],
    },
    BodyPart {
        slug: BodySlug::Calves,
        common: &[],
        left: &["M123.3 272 L130.7 270 L132.9 300 L127.6 326 L123.3 326 Z"],
        right: &["M76.7 272 L69.3 270 L67.1 300 L72.4 326 L76.7 326 Z"],
    },
    BodyPart {
        slug: BodySlug::Feet,
        common: &[],
        left: &["M110.6 334 L129.7 334 L136 358 L112.7 362 L108.5 350 Z"],
        right: &["M89.4 334 L70.3 334 L64 358 L87.3 362 L91.5 350 Z"],
    },
    BodyPart {
        slug: BodySlug::Ankles,
        common: &[],
        left: &["M112.7 334 L127.6 334 L128.6 344 L111.7 344 Z"],
        right: &["M87.3 334 L72.4 334 L71.4 344 L88.3 344 Z"],
    },
];

pub static FEMALE_BACK: &[BodyPart] = &[
    BodyPart {
        slug: BodySlug::Head,
        common: &[
            "M88.3 22 C88.3 12.6 93.5 5 100 5 C106.5 5 111.7 12.6 111.7 22 C111.7 31.4 106.5 39 100 39 C93.5 39 88.3 31.4 88.3 22 Z",
        ],
        left: &[],
        right: &[],
    },
    BodyPart {
        slug: BodySlug::Hair,
        common: &["M87.4 18 L89.2 8 L100 3 L110.8 8 L112.6 18 L100 14 Z"],
        left: &[],
        right: &[],
    },
    BodyPart {
        slug: BodySlug::Neck,
        common: &["M92.8 36 L107.2 36 L109 48 L91 48 Z"],
        left: &[],
        right: &[],
    },
    BodyPart {
        slug: BodySlug::Trapezius,
        common: &[
            "M100 40 L110.8 46 L128.8 53 L112.6 70 L103.6 98 L100 104 L96.4 98 L87.4 70 L71.2 53 L89.2 46 Z",
        ],
        left: &[],
        right: &[],
    },
    BodyPart {
        slug: BodySlug::Deltoids,
        common: &[],
        left: &["M73 54 L62.2 56 L55.9 66 L55.9 82 L64.9 80 L70.3 68 Z"],
        right: &["M127 54 L137.8 56 L144.1 66 L144.1 82 L135.1 80 L129.7 68 Z"],
    },
    BodyPart {
        slug: BodySlug::RotatorCuff,
        common: &[],
        left: &["M85.6 64 L73 58 L69.4 70 L80.2 80 L86.5 74 Z"],
        right: &["M114.4 64 L127 58 L130.6 70 L119.8 80 L113.5 74 Z"],
    },
    BodyPart {
        slug: BodySlug::Rhomboids,
        common: &[],
        left: &["M99.1 66 L91 66 L94.6 92 L99.1 96 Z"],
        right: &["M100.9 66 L109 66 L105.4 92 L100.9 96 Z"],
    },
    BodyPart {
        slug: BodySlug::UpperBack,
        common: &[],
        left: &["M90.1 76 L76.6 80 L72.1 96 L75.6 120 L90.5 124 L93.7 100 Z"],
        right: &["M109.9 76 L123.4 80 L127.9 96 L124.4 120 L109.5 124 L106.3 100 Z"],
    },
    BodyPart {
        slug: BodySlug::Triceps,
        common: &[],
        left: &["M69.4 84 L57.7 84 L55.7 102 L57.7 120 L65.2 120 L70.3 100 Z"],
        right: &["M130.6 84 L142.3 84 L144.3 102 L142.3 120 L134.8 120 L129.7 100 Z"],
    },
    BodyPart {
        slug: BodySlug::Forearm,
        common: &[],
        left: &["M64.1 122 L54.8 121 L45.1 140 L39.9 168 L48 170 L59.3 146 Z"],
        right: &["M135.9 122 L145.2 121 L154.9 140 L160.1 168 L152 170 L140.7 146 Z"],
    },
    BodyPart {
        slug: BodySlug::Hands,
        common: &[],
        left: &["M47.6 174 L37.2 173 L30 186 L34.3 198 L43.8 197 L48.1 186 Z"],
        right: &["M152.4 174 L162.8 173 L170 186 L165.7 198 L156.2 197 L151.9 186 Z"],
    },
    BodyPart {
        slug: BodySlug::LowerBack,
        common: &["M90.5 126 L109.5 126 L112 150 L100 154 L88 150 Z"],
        left: &[],
        right: &[],
    },
    BodyPart {
        slug: BodySlug::Gluteal,
        common: &[],
        left: &["M99 156 L75.9 152 L66.7 170 L70.3 188 L89.4 190 L98.9 184 Z"],
        right: &["M101 156 L124.1 152 L133.3 170 L129.7 188 L110.6 190 L101.1 184 Z"],
    },
    BodyPart {
        slug: BodySlug::Hamstring,
        common: &[],
        left: &["M97.9 194 L70.3 192 L67.1 220 L72.4 250 L87.3 250 L95.8 230 Z"],
        right: &["M102.1 194 L129.7 192 L132.9 220 L127.6 250 L112.7 250 L104.2 230 Z"],
    },
    BodyPart {
        slug: BodySlug::Adductors,
        common: &[],
        left: &["M96.8 196 L90.5 196 L90.5 232 L94.7 228 Z"],
        right: &["M103.2 196 L109.5 196 L109.5 232 L105.3 228 Z"],
    },
    BodyPart {
        slug: BodySlug::Calves,
        common: &[],
        left: &["M89.4 262 L70.3 260 L66.1 290 L72.4 326 L85.2 326 L91.5 290 Z"],
        right: &["M110.6 262 L129.7 260 L133.9 290 L127.6 326 L114.8 326 L108.5 290 Z"],
    },
    BodyPart {
        slug: BodySlug::Feet,
        common: &[],
        left: &["M88.3 330 L70.3 330 L68.2 352 L89.4 352 Z"],
        right: &["M111.7 330 L129.7 330 L131.8 352 L110.6 352 Z"],
    },
    BodyPart {
        slug: BodySlug::Ankles,
        common: &[],
        left: &["M86.2 330 L72.4 330 L72.4 340 L86.2 340 Z"],
        right: &["M113.8 330 L127.6 330 L127.6 340 L113.8 340 Z"],
    },
];
