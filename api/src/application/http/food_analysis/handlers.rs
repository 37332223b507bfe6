pub mod analyse_food_image;
